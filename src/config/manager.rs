use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::chat::SessionConfig;
use crate::paths;
use crate::portfolio::{self, PortfolioSnapshot};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Settings in the `[chat]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

impl ChatConfig {
    /// Name of the variable holding the API key, `API_KEY` by default.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.api_key_env())
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// Settings in the `[portfolio]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// TOML file replacing the built-in portfolio.
    pub path: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/neo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub portfolio: Option<PathBuf>,
}

/// Merges CLI options, the config file and built-in defaults, in that order.
///
/// Never fails: a missing API key is left for the chat adapter to report.
pub fn resolve_chat_config(options: &ResolveOptions, config_file: &ConfigFile) -> SessionConfig {
    let chat = &config_file.chat;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(chat.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .to_string();

    let model = options
        .model
        .as_ref()
        .or(chat.model.as_ref())
        .map_or(DEFAULT_MODEL, String::as_str)
        .to_string();

    SessionConfig {
        endpoint,
        model,
        api_key: chat.get_api_key(),
        api_key_env: chat.api_key_env().to_string(),
    }
}

/// Picks the portfolio file from CLI or config, falling back to the built-in one.
pub fn resolve_portfolio(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<Cow<'static, PortfolioSnapshot>> {
    match options
        .portfolio
        .as_ref()
        .or(config_file.portfolio.path.as_ref())
    {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading portfolio");
            Ok(Cow::Owned(PortfolioSnapshot::load(path)?))
        }
        None => Ok(Cow::Borrowed(portfolio::builtin())),
    }
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration lives at `$XDG_CONFIG_HOME/neo/config.toml`
    /// or `~/.config/neo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Uses an explicit config file path instead of the XDG location.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file. A missing file yields the defaults; a file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }

        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }
}
