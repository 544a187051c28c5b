//! Turns a transcript plus a new message into exactly one reply string.

use anyhow::Result;

use super::client::{ChatRequest, ChatTransport, ChatTurn};
use super::prompt::build_system_instruction;
use crate::portfolio::PortfolioSnapshot;
use crate::transcript::{Speaker, TranscriptEntry};

/// Used when the service answers with no text.
pub const FALLBACK_REPLY: &str = "Something went wrong.";

/// Shown in place of any configuration or transport failure.
pub const FAILURE_REPLY: &str =
    "Error 500: Neural link severed. Please check your API key or try again later.";

/// Stateless relay between a chat transcript and a [`ChatTransport`].
///
/// [`ChatAdapter::reply`] never fails: errors are logged and replaced by
/// [`FAILURE_REPLY`].
pub struct ChatAdapter<T> {
    transport: T,
    system_instruction: String,
}

impl<T: ChatTransport> ChatAdapter<T> {
    /// Wraps `transport`, building the system instruction from `portfolio` once.
    pub fn new(transport: T, portfolio: &PortfolioSnapshot) -> Result<Self> {
        Ok(Self {
            transport,
            system_instruction: build_system_instruction(portfolio)?,
        })
    }

    /// The persona prompt sent with every request.
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Builds the outgoing request: prior turns in order, then `message`.
    pub fn request(&self, history: &[TranscriptEntry], message: &str) -> ChatRequest {
        let turns = history
            .iter()
            .map(|entry| ChatTurn {
                role: entry.speaker,
                text: entry.text.clone(),
            })
            .chain(std::iter::once(ChatTurn {
                role: Speaker::User,
                text: message.to_string(),
            }))
            .collect();

        ChatRequest {
            system_instruction: self.system_instruction.clone(),
            turns,
        }
    }

    /// Asks the service for a reply to `message` given the prior `history`.
    pub async fn reply(&self, history: &[TranscriptEntry], message: &str) -> String {
        let request = self.request(history, message);

        match self.transport.complete(&request).await {
            Ok(Some(text)) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!("chat service returned an empty reply");
                FALLBACK_REPLY.to_string()
            }
            Err(e) => {
                tracing::error!(kind = e.kind(), error = %e, "chat request failed");
                FAILURE_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use crate::chat::error::ChatError;
    use crate::portfolio::builtin;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Script {
        Reply(Option<String>),
        Fail,
    }

    /// Scripted transport recording every request it sees.
    pub struct FakeTransport {
        script: Script,
        calls: AtomicUsize,
        last_request: Mutex<Option<ChatRequest>>,
    }

    impl FakeTransport {
        fn with_script(script: Script) -> Self {
            Self {
                script,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        pub fn replying(text: &str) -> Self {
            Self::with_script(Script::Reply(Some(text.to_string())))
        }

        pub fn silent() -> Self {
            Self::with_script(Script::Reply(None))
        }

        pub fn failing() -> Self {
            Self::with_script(Script::Fail)
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ChatTransport for FakeTransport {
        async fn complete(&self, request: &ChatRequest) -> Result<Option<String>, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());

            match &self.script {
                Script::Reply(text) => Ok(text.clone()),
                Script::Fail => Err(ChatError::MissingApiKey {
                    env_var: "API_KEY".to_string(),
                }),
            }
        }
    }

    impl ChatAdapter<FakeTransport> {
        pub fn transport_calls(&self) -> usize {
            self.transport.call_count()
        }

        pub fn last_request(&self) -> Option<ChatRequest> {
            self.transport.last_request.lock().unwrap().clone()
        }
    }

    fn make_adapter(transport: FakeTransport) -> ChatAdapter<FakeTransport> {
        ChatAdapter::new(transport, builtin()).unwrap()
    }

    #[tokio::test]
    async fn test_reply_returns_service_text() {
        let adapter = make_adapter(FakeTransport::replying("T"));
        assert_eq!(adapter.reply(&[], "hi").await, "T");
        assert_eq!(adapter.transport_calls(), 1);
    }

    #[tokio::test]
    async fn test_reply_failure_is_in_character() {
        let adapter = make_adapter(FakeTransport::failing());
        assert_eq!(adapter.reply(&[], "hi").await, FAILURE_REPLY);
        assert_eq!(adapter.transport_calls(), 1);
    }

    #[tokio::test]
    async fn test_reply_empty_uses_fallback() {
        let adapter = make_adapter(FakeTransport::replying(""));
        assert_eq!(adapter.reply(&[], "hi").await, FALLBACK_REPLY);

        let adapter = make_adapter(FakeTransport::silent());
        assert_eq!(adapter.reply(&[], "hi").await, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_request_replays_history_then_message() {
        let adapter = make_adapter(FakeTransport::replying("T"));
        let history = vec![
            TranscriptEntry::assistant("Hey!"),
            TranscriptEntry::user("projects?"),
            TranscriptEntry::assistant("Three of them."),
        ];

        adapter.reply(&history, "which is best?").await;

        let request = adapter.last_request().unwrap();
        let roles: Vec<_> = request.turns.iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                Speaker::Assistant,
                Speaker::User,
                Speaker::Assistant,
                Speaker::User
            ]
        );
        assert_eq!(request.turns[3].text, "which is best?");
        assert_eq!(request.system_instruction, adapter.system_instruction());
        assert!(request.system_instruction.contains("Trishit Majumdar"));
    }
}
