//! Chat mode UI components.

use crate::transcript::{Speaker, TranscriptEntry};
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {}",
        Style::header(" AI ASSISTANT "),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_entry(entry: &TranscriptEntry) {
    match entry.speaker {
        Speaker::User => println!("{} {}", Style::user("you>"), entry.text),
        Speaker::Assistant => println!("{} {}", Style::assistant("bot>"), entry.text),
    }
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Link closed."));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    let key_status = if config.api_key.is_some() {
        Style::success("(set)")
    } else {
        Style::warning("(not set)")
    };
    println!(
        "  {}    {} {}",
        Style::label("api key"),
        Style::secondary(&config.api_key_env),
        key_status
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show endpoint, model and key status")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Close the assistant")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
