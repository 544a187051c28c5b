use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "neo")]
#[command(about = "Neo-brutalist portfolio terminal with an AI assistant")]
#[command(version)]
pub struct Args {
    /// Portfolio TOML file (replaces the built-in profile)
    #[arg(short = 'p', long, global = true)]
    pub portfolio: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Runs the terminal when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Log filter for the requested verbosity.
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,neo_cli=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the portfolio terminal
    Terminal,
    /// Chat with the portfolio's AI assistant
    Chat {
        /// API endpoint URL (OpenAI-compatible)
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Print the portfolio
    Profile {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
