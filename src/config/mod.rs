//! Configuration file loading and precedence rules.

mod manager;

pub use manager::{
    ChatConfig, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    PortfolioConfig, ResolveOptions, resolve_chat_config, resolve_portfolio,
};
