use anyhow::Result;
use std::path::PathBuf;

use crate::chat::ChatSession;
use crate::config::{ResolveOptions, resolve_chat_config, resolve_portfolio};

pub struct ChatOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub portfolio: Option<PathBuf>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config_file = super::load_config_file()?;
    let resolve = ResolveOptions {
        endpoint: options.endpoint,
        model: options.model,
        portfolio: options.portfolio,
    };

    let portfolio = resolve_portfolio(&resolve, &config_file)?;
    let config = resolve_chat_config(&resolve, &config_file);

    if config.api_key.is_none() {
        tracing::warn!(
            env_var = %config.api_key_env,
            "no API key configured; the assistant will not be able to answer"
        );
    }
    tracing::info!(endpoint = %config.endpoint, model = %config.model, "starting chat");

    let mut session = ChatSession::new(config, &portfolio)?;
    session.run().await
}
