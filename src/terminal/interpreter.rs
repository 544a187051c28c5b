//! Maps terminal commands to canned responses from the portfolio.

use chrono::Local;

use super::command::{Input, TerminalCommand, parse_input};
use crate::portfolio::PortfolioSnapshot;
use crate::transcript::{Transcript, TranscriptEntry};

/// Marker printed before every echoed command.
pub const PROMPT: &str = "user@neo:~$";

/// Format used by the `date` command.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const HELP_TEXT: &str = "Available commands: about, projects, skills, contact, clear, date";

/// What [`Interpreter::evaluate`] did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Empty input, nothing appended.
    Ignored,
    /// The transcript was emptied.
    Cleared,
    /// An echo line and a response were appended.
    Appended,
}

pub struct Interpreter<'a> {
    portfolio: &'a PortfolioSnapshot,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter answering from `portfolio`.
    pub const fn new(portfolio: &'a PortfolioSnapshot) -> Self {
        Self { portfolio }
    }

    /// Evaluates one raw input line against `transcript`.
    pub fn evaluate(&self, transcript: &mut Transcript, raw: &str) -> Outcome {
        let Input::Command(command) = parse_input(raw) else {
            return Outcome::Ignored;
        };

        let Some(response) = self.respond(&command) else {
            transcript.clear();
            tracing::debug!("terminal transcript cleared");
            return Outcome::Cleared;
        };

        tracing::debug!(?command, "terminal command");
        transcript.push(TranscriptEntry::user(format!("{PROMPT} {raw}")));
        transcript.push(TranscriptEntry::assistant(response));
        Outcome::Appended
    }

    /// Response text for `command`, or `None` for `clear`.
    pub fn respond(&self, command: &TerminalCommand) -> Option<String> {
        let response = match command {
            TerminalCommand::Help => HELP_TEXT.to_string(),
            TerminalCommand::About => self.portfolio.about.clone(),
            TerminalCommand::Projects => self
                .portfolio
                .projects
                .iter()
                .map(|p| format!("> {}: {}", p.title, p.description))
                .collect::<Vec<_>>()
                .join("\n"),
            TerminalCommand::Skills => self
                .portfolio
                .skills
                .iter()
                .map(|s| format!("[{}]: {}", s.category, s.items.join(", ")))
                .collect::<Vec<_>>()
                .join("\n"),
            TerminalCommand::Contact => format!(
                "GitHub: {}\nLinkedIn: {}",
                self.portfolio.socials.github, self.portfolio.socials.linkedin
            ),
            TerminalCommand::Date => Local::now().format(DATE_FORMAT).to_string(),
            TerminalCommand::Clear => return None,
            TerminalCommand::Unknown(cmd) => {
                format!("Command not found: {cmd}. Type 'help' for assistance.")
            }
        };

        Some(response)
    }
}
