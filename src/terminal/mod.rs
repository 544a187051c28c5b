//! The fake command-line terminal.
//!
//! A REPL around a tiny command interpreter that answers from the portfolio.

/// Command parsing and autocomplete.
pub mod command;
/// Command evaluation against a transcript.
pub mod interpreter;
mod session;
mod ui;

pub use command::{Input, TerminalCommand, parse_input};
pub use interpreter::{Interpreter, Outcome, PROMPT};
pub use session::{BOOT_SEQUENCE, TerminalSession, boot_log};
