use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use neo_cli::cli::commands::{chat, profile, terminal};
use neo_cli::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v/-q
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        None | Some(Command::Terminal) => {
            terminal::run_terminal(terminal::TerminalOptions {
                portfolio: args.portfolio,
            })?;
        }
        Some(Command::Chat { endpoint, model }) => {
            let options = chat::ChatOptions {
                endpoint,
                model,
                portfolio: args.portfolio,
            };
            chat::run_chat(options).await?;
        }
        Some(Command::Profile { json }) => {
            profile::print_profile(profile::ProfileOptions {
                portfolio: args.portfolio,
                json,
            })?;
        }
    }

    Ok(())
}
