//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager};

/// Chat mode command handler.
pub mod chat;

/// Profile printing command handler.
pub mod profile;

/// Terminal mode command handler.
pub mod terminal;

fn load_config_file() -> Result<ConfigFile> {
    let manager = ConfigManager::new()?;
    tracing::debug!(path = %manager.config_path().display(), "loading config");
    manager.load()
}
