use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::{self, Write};

use super::command::CommandCompleter;
use super::interpreter::{Interpreter, Outcome, PROMPT};
use super::ui;
use crate::portfolio::PortfolioSnapshot;
use crate::transcript::{Transcript, TranscriptEntry};
use crate::ui::is_prompt_cancelled;

/// Boot lines that follow the welcome banner.
pub const BOOT_SEQUENCE: &[&str] = &[
    "Initializing Android Runtime...",
    "Loading Kotlin Multiplatform modules...",
    "System ready. Type 'help' for commands.",
];

/// Lines shown when the terminal boots, welcome banner first.
///
/// The banner is named after the owner's first name, e.g. `TrishitOS`.
pub fn boot_log(portfolio: &PortfolioSnapshot) -> Vec<String> {
    let first_name = portfolio.name.split_whitespace().next().unwrap_or("Neo");

    std::iter::once(format!("Welcome to {first_name}OS v1.0.0"))
        .chain(BOOT_SEQUENCE.iter().map(ToString::to_string))
        .collect()
}

/// An interactive terminal session.
pub struct TerminalSession<'a> {
    interpreter: Interpreter<'a>,
    transcript: Transcript,
}

impl<'a> TerminalSession<'a> {
    /// Creates a session whose transcript holds the boot log.
    pub fn new(portfolio: &'a PortfolioSnapshot) -> Self {
        let transcript = boot_log(portfolio)
            .into_iter()
            .map(TranscriptEntry::assistant)
            .collect();

        Self {
            interpreter: Interpreter::new(portfolio),
            transcript,
        }
    }

    /// Everything shown since boot or the last `clear`.
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Feeds one line to the interpreter and returns the newly appended entries.
    pub fn submit(&mut self, line: &str) -> (Outcome, &[TranscriptEntry]) {
        let start = self.transcript.len();
        let outcome = self.interpreter.evaluate(&mut self.transcript, line);
        let appended: &[TranscriptEntry] = match outcome {
            Outcome::Appended => self.transcript.since(start),
            Outcome::Ignored | Outcome::Cleared => &[],
        };
        (outcome, appended)
    }

    /// Runs the REPL until Ctrl+C or Esc.
    pub fn run(&mut self) -> Result<()> {
        ui::print_header();
        for entry in self.transcript.entries() {
            ui::print_entry(entry);
        }

        let prompt_style = Styled::new(PROMPT)
            .with_fg(Color::White)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::LightGreen));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(CommandCompleter)
                .with_help_message("Type 'help' for commands, Ctrl+C to exit")
                .prompt();

            match input {
                Ok(line) => {
                    let (outcome, appended) = self.submit(&line);
                    if outcome == Outcome::Cleared {
                        ui::clear_screen();
                    }
                    // The answered prompt already shows the echo line
                    for entry in appended.iter().skip(1) {
                        ui::print_entry(entry);
                    }
                    io::stdout().flush()?;
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }
}
