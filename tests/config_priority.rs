//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file values
//! 3. Built-in defaults

use neo_cli::config::{
    ChatConfig, ConfigFile, DEFAULT_ENDPOINT, DEFAULT_MODEL, PortfolioConfig, ResolveOptions,
    resolve_chat_config, resolve_portfolio,
};
use serial_test::serial;
use std::path::PathBuf;

fn make_config() -> ConfigFile {
    ConfigFile {
        chat: ChatConfig {
            endpoint: Some("http://config.local".to_string()),
            model: Some("config_model".to_string()),
            api_key: Some("config_key".to_string()),
            api_key_env: Some("NEO_PRIORITY_TEST_KEY".to_string()),
        },
        portfolio: PortfolioConfig::default(),
    }
}

#[test]
fn test_cli_endpoint_overrides_config() {
    let options = ResolveOptions {
        endpoint: Some("http://cli.local".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_chat_config(&options, &make_config());

    assert_eq!(resolved.endpoint, "http://cli.local");
    assert_eq!(resolved.model, "config_model");
}

#[test]
fn test_cli_model_overrides_config() {
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_chat_config(&options, &make_config());

    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.endpoint, "http://config.local");
}

#[test]
fn test_defaults_when_nothing_configured() {
    let resolved = resolve_chat_config(&ResolveOptions::default(), &ConfigFile::default());

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.model, DEFAULT_MODEL);
}

#[test]
#[serial]
fn test_env_key_overrides_config_key() {
    // SAFETY: serialized with the other env-var tests
    unsafe { std::env::set_var("NEO_PRIORITY_TEST_KEY", "env_key") };

    let resolved = resolve_chat_config(&ResolveOptions::default(), &make_config());
    assert_eq!(resolved.api_key.as_deref(), Some("env_key"));
    assert_eq!(resolved.api_key_env, "NEO_PRIORITY_TEST_KEY");

    unsafe { std::env::remove_var("NEO_PRIORITY_TEST_KEY") };
}

#[test]
#[serial]
fn test_config_key_used_without_env() {
    unsafe { std::env::remove_var("NEO_PRIORITY_TEST_KEY") };

    let resolved = resolve_chat_config(&ResolveOptions::default(), &make_config());
    assert_eq!(resolved.api_key.as_deref(), Some("config_key"));
}

#[test]
fn test_cli_portfolio_overrides_config() {
    let mut config = make_config();
    config.portfolio.path = Some(PathBuf::from("/nonexistent/from-config.toml"));

    let options = ResolveOptions {
        portfolio: Some(PathBuf::from("/nonexistent/from-cli.toml")),
        ..ResolveOptions::default()
    };

    let Err(err) = resolve_portfolio(&options, &config) else {
        panic!("expected an error");
    };
    assert!(format!("{err:#}").contains("from-cli.toml"));
}
