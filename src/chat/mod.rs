//! The AI chat assistant.
//!
//! A [`ChatWidget`] keeps the transcript and the one-request-at-a-time state
//! machine, a [`ChatAdapter`] turns history into a single reply, and an
//! [`OpenAiClient`] talks to any OpenAI-compatible endpoint.

mod adapter;
mod client;
/// Slash command parsing and autocomplete.
pub mod command;
mod error;
mod prompt;
mod session;
mod ui;
mod widget;

pub use adapter::{ChatAdapter, FAILURE_REPLY, FALLBACK_REPLY};
pub use client::{ChatRequest, ChatTransport, ChatTurn, OpenAiClient};
pub use error::ChatError;
pub use prompt::build_system_instruction;
pub use session::{ChatSession, SessionConfig, greeting};
pub use widget::{ChatState, ChatWidget, PendingTurn};
