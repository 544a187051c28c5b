use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::adapter::ChatAdapter;
use super::client::OpenAiClient;
use super::command::{ChatInput, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use super::widget::ChatWidget;
use crate::portfolio::PortfolioSnapshot;
use crate::ui::{Spinner, is_prompt_cancelled};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key, if one was found.
    pub api_key: Option<String>,
    /// Environment variable the key is read from (for display and errors).
    pub api_key_env: String,
}

/// Opening line of every conversation.
pub fn greeting(portfolio: &PortfolioSnapshot) -> String {
    format!(
        "Hey! I'm the AI assistant for this portfolio. Ask me anything about {}'s code, skills, or projects.",
        portfolio.name
    )
}

/// An interactive assistant session.
pub struct ChatSession {
    config: SessionConfig,
    widget: ChatWidget<OpenAiClient>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig, portfolio: &PortfolioSnapshot) -> Result<Self> {
        let client = OpenAiClient::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
            config.api_key_env.clone(),
        );
        let adapter = ChatAdapter::new(client, portfolio)?;
        let widget = ChatWidget::new(adapter, greeting(portfolio));

        Ok(Self { config, widget })
    }

    /// Runs the chat REPL until `/quit`, Ctrl+C or Esc.
    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        for entry in self.widget.transcript().entries() {
            ui::print_entry(entry);
        }

        let prompt_style = Styled::new("you>")
            .with_fg(Color::LightMagenta)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkYellow));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder("Ask about my projects...")
                .with_help_message("/help for commands, Ctrl+C to close")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    ChatInput::Empty => {}
                    ChatInput::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    ChatInput::Message(text) => {
                        println!();
                        self.send_and_print(&text).await;
                    }
                },
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

    fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    async fn send_and_print(&mut self, text: &str) {
        let spinner = Spinner::new("thinking...");
        let reply = self.widget.submit(text).await;
        spinner.stop();

        if let Some(entry) = reply {
            ui::print_entry(entry);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chat::widget::ChatState;
    use crate::portfolio::builtin;

    fn config() -> SessionConfig {
        SessionConfig {
            endpoint: "http://localhost:11434".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            api_key_env: "API_KEY".to_string(),
        }
    }

    #[test]
    fn test_greeting_names_subject() {
        assert_eq!(
            greeting(builtin()),
            "Hey! I'm the AI assistant for this portfolio. Ask me anything about Trishit Majumdar's code, skills, or projects."
        );
    }

    #[test]
    fn test_new_session_starts_idle_with_greeting() {
        let session = ChatSession::new(config(), builtin()).unwrap();
        assert_eq!(session.widget.state(), ChatState::Idle);
        assert_eq!(session.widget.transcript().len(), 1);
    }

    #[test]
    fn test_handle_command_quit() {
        let session = ChatSession::new(config(), builtin()).unwrap();
        assert!(!session.handle_command(SlashCommand::Quit));
        assert!(session.handle_command(SlashCommand::Unknown("nope".to_string())));
    }

    #[tokio::test]
    async fn test_missing_key_replies_in_character() {
        let mut session = ChatSession::new(config(), builtin()).unwrap();

        let reply = session.widget.submit("hello").await.map(|e| e.text.clone());

        assert_eq!(reply.as_deref(), Some(crate::chat::adapter::FAILURE_REPLY));
        assert_eq!(session.widget.state(), ChatState::Idle);
    }
}
