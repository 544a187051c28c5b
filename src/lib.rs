//! # neo - a portfolio in your terminal
//!
//! `neo` presents a developer portfolio as two small interactive widgets:
//!
//! - **Terminal**: a fake shell answering `help`, `about`, `projects`,
//!   `skills`, `contact`, `date` and `clear` from the portfolio data.
//! - **Chat**: an AI assistant that relays questions about the portfolio to
//!   any OpenAI-compatible chat completions endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the terminal
//! neo
//!
//! # Talk to the assistant (reads the key from $API_KEY)
//! API_KEY=sk-... neo chat
//!
//! # Dump the portfolio
//! neo profile --json
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/neo/config.toml`:
//!
//! ```toml
//! [chat]
//! endpoint = "http://localhost:11434"
//! model = "llama3.2"
//! api_key_env = "API_KEY"
//!
//! [portfolio]
//! path = "~/me.toml"
//! ```

/// The AI chat assistant.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Portfolio data model and the built-in profile.
pub mod portfolio;

/// The fake command-line terminal.
pub mod terminal;

/// Ordered dialogue history.
pub mod transcript;

/// Terminal UI components (spinner, colors).
pub mod ui;
