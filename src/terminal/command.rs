use inquire::autocompletion::{Autocomplete, Replacement};

/// Recognized terminal commands: (command, description)
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show available commands"),
    ("about", "Who is behind this portfolio"),
    ("projects", "List projects"),
    ("skills", "List skills by category"),
    ("contact", "Where to find me"),
    ("clear", "Clear the screen"),
    ("date", "Show the current date and time"),
];

/// Command name autocompleter
#[derive(Clone, Default)]
pub struct CommandCompleter;

impl Autocomplete for CommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        let input = input.trim_start().to_lowercase();
        if input.is_empty() {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(&input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Terminal command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Help,
    About,
    Projects,
    Skills,
    Contact,
    Clear,
    Date,
    /// Holds the normalized (trimmed, lower-cased) input.
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Command(TerminalCommand),
    Empty,
}

/// Trims and lower-cases `input`, then maps it to a command.
pub fn parse_input(input: &str) -> Input {
    let cmd = input.trim().to_lowercase();

    let command = match cmd.as_str() {
        "" => return Input::Empty,
        "help" => TerminalCommand::Help,
        "about" => TerminalCommand::About,
        "projects" => TerminalCommand::Projects,
        "skills" => TerminalCommand::Skills,
        "contact" => TerminalCommand::Contact,
        "clear" => TerminalCommand::Clear,
        "date" => TerminalCommand::Date,
        _ => TerminalCommand::Unknown(cmd),
    };

    Input::Command(command)
}
