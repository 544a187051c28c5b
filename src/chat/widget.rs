//! Chat widget: a transcript plus an `Idle -> AwaitingReply -> Idle` cycle.

use super::adapter::ChatAdapter;
use super::client::ChatTransport;
use crate::transcript::{Transcript, TranscriptEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

/// A user message accepted by [`ChatWidget::begin`] and not yet answered.
#[derive(Debug)]
#[must_use = "an accepted message leaves the widget awaiting a reply until finished"]
pub struct PendingTurn {
    message: String,
    /// Transcript length before the user message was appended.
    history_len: usize,
}

impl PendingTurn {
    /// The trimmed message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A chat panel: the transcript plus the adapter that answers it.
pub struct ChatWidget<T> {
    adapter: ChatAdapter<T>,
    transcript: Transcript,
    state: ChatState,
}

impl<T: ChatTransport> ChatWidget<T> {
    /// Creates a widget whose transcript starts with `greeting` from the assistant.
    pub fn new(adapter: ChatAdapter<T>, greeting: impl Into<String>) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(TranscriptEntry::assistant(greeting));

        Self {
            adapter,
            transcript,
            state: ChatState::Idle,
        }
    }

    /// Whether a reply is outstanding.
    pub const fn state(&self) -> ChatState {
        self.state
    }

    /// The conversation so far, greeting included.
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Accepts a message if it is non-empty and no reply is outstanding.
    ///
    /// On acceptance the trimmed message is appended as a user entry and the
    /// widget moves to [`ChatState::AwaitingReply`].
    pub fn begin(&mut self, raw: &str) -> Option<PendingTurn> {
        let message = raw.trim();
        if message.is_empty() {
            return None;
        }
        if self.state == ChatState::AwaitingReply {
            tracing::debug!("message rejected: a reply is still outstanding");
            return None;
        }

        let history_len = self.transcript.len();
        self.transcript.push(TranscriptEntry::user(message));
        self.state = ChatState::AwaitingReply;

        Some(PendingTurn {
            message: message.to_string(),
            history_len,
        })
    }

    /// Records the reply for `pending` and returns to [`ChatState::Idle`].
    pub fn finish(&mut self, _pending: PendingTurn, reply: String) -> &TranscriptEntry {
        self.state = ChatState::Idle;
        self.transcript.push(TranscriptEntry::assistant(reply))
    }

    /// Sends `raw` through the adapter and appends the reply.
    ///
    /// Returns `None` when the message was rejected.
    pub async fn submit(&mut self, raw: &str) -> Option<&TranscriptEntry> {
        let pending = self.begin(raw)?;

        let history = &self.transcript.entries()[..pending.history_len];
        let reply = self.adapter.reply(history, &pending.message).await;

        Some(self.finish(pending, reply))
    }
}
