//! Color helpers for the neo-brutalist terminal look, using owo-colors.
//!
//! Every helper checks stdout first: colors are dropped when `NO_COLOR` is
//! set or stdout is not a terminal, so piped output stays plain text.

use owo_colors::{OwoColorize, Stream::Stdout};
use std::fmt::Display;

pub struct Style;

impl Style {
    /// Section headers and window titles
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| format!("{}", t.bold().reversed())))
    }

    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| t.dimmed()))
    }

    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| t.cyan()))
    }

    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| t.dimmed()))
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| t.green()))
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| format!("{}", t.red().bold())))
    }

    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| t.yellow()))
    }

    /// Command names in help listings
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| t.green()))
    }

    /// Echoed prompt lines in the terminal transcript
    pub fn prompt<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| format!("{}", t.white().bold())))
    }

    /// Terminal output, green-on-black
    pub fn output<T: Display>(text: T) -> String {
        format!(
            "{}",
            text.if_supports_color(Stdout, |t| format!("{}", t.bright_green().bold()))
        )
    }

    /// The user's side of the chat
    pub fn user<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| format!("{}", t.magenta().bold())))
    }

    /// The assistant's side of the chat
    pub fn assistant<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| format!("{}", t.yellow().bold())))
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.if_supports_color(Stdout, |t| t.dimmed()))
    }
}

