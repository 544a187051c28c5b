//! Terminal mode UI components.

use crate::transcript::{Speaker, TranscriptEntry};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {}",
        Style::header(" NEO_OS_TERM "),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_entry(entry: &TranscriptEntry) {
    match entry.speaker {
        Speaker::User => println!("{}", Style::prompt(&entry.text)),
        Speaker::Assistant => println!("{}", Style::output(&entry.text)),
    }
}

/// Wipes the visible screen after `clear`.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

pub fn print_goodbye() {
    println!("{}", Style::success("Session terminated."));
}
