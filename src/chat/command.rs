use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show endpoint, model and key status"),
    ("/help", "Show available commands"),
    ("/quit", "Close the assistant"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(ToString::to_string)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// One line typed into the assistant prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatInput {
    Message(String),
    Command(SlashCommand),
    Empty,
}

/// Classifies a chat line as a slash command, a message or nothing.
pub fn parse_input(input: &str) -> ChatInput {
    let input = input.trim();

    if input.is_empty() {
        return ChatInput::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| ChatInput::Message(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> ChatInput {
    let command = match cmd.split_whitespace().next() {
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.trim().to_string()),
    };
    ChatInput::Command(command)
}
