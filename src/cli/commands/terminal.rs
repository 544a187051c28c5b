use anyhow::Result;
use std::path::PathBuf;

use crate::config::{ResolveOptions, resolve_portfolio};
use crate::terminal::TerminalSession;

pub struct TerminalOptions {
    pub portfolio: Option<PathBuf>,
}

pub fn run_terminal(options: TerminalOptions) -> Result<()> {
    let config_file = super::load_config_file()?;
    let resolve = ResolveOptions {
        portfolio: options.portfolio,
        ..ResolveOptions::default()
    };
    let portfolio = resolve_portfolio(&resolve, &config_file)?;

    TerminalSession::new(&portfolio).run()
}
