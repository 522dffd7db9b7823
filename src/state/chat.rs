//! Conversation state for the chat widget.
//!
//! DESIGN
//! ======
//! The conversation is a two-state machine. `begin_submit` moves
//! `Idle -> AwaitingResponse` and `settle` moves it back, so there is never
//! more than one typing indicator and a reply can only clear the request it
//! belongs to.
//!
//! Messages are append-only and kept in the order they were sent or
//! received.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatError;
use crate::util::text::{normalize_message_text, trimmed_non_empty};

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// CSS modifier used on the message row (`msg user` / `msg bot`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }

    /// Avatar glyph shown next to the bubble.
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "🙂",
            Self::Bot => "🤖",
        }
    }
}

/// A single rendered message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    /// Normalized text, ready to render.
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub sent_at_ms: f64,
}

/// Conversation phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    AwaitingResponse {
        request_id: String,
    },
}

/// A request accepted by `begin_submit` that still needs sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: String,
    /// Trimmed text to send.
    pub text: String,
}

/// Why a submit did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The draft was empty after trimming.
    EmptyDraft,
    /// A previous request has not settled yet.
    RequestOutstanding,
}

/// State for the chat conversation.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub phase: ChatPhase,
}

impl ChatState {
    /// Append a message, normalizing its text.
    pub fn push_message(&mut self, role: Role, text: &str, sent_at_ms: f64) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: normalize_message_text(text),
            sent_at_ms,
        });
    }

    /// Whether a request is outstanding, i.e. the typing indicator is shown.
    pub fn is_awaiting_response(&self) -> bool {
        matches!(self.phase, ChatPhase::AwaitingResponse { .. })
    }

    /// Start a submit from the composer draft.
    ///
    /// On success the user's message is already appended and the state is
    /// `AwaitingResponse`; the caller sends the returned request and later
    /// passes its id to [`ChatState::settle`].
    ///
    /// # Errors
    ///
    /// Returns a `SubmitRejection` and leaves the state untouched when the
    /// draft is blank or another request is still outstanding.
    pub fn begin_submit(&mut self, draft: &str, now_ms: f64) -> Result<PendingRequest, SubmitRejection> {
        let Some(text) = trimmed_non_empty(draft) else {
            return Err(SubmitRejection::EmptyDraft);
        };
        if self.is_awaiting_response() {
            return Err(SubmitRejection::RequestOutstanding);
        }

        let text = text.to_owned();
        self.push_message(Role::User, &text, now_ms);
        let id = uuid::Uuid::new_v4().to_string();
        self.phase = ChatPhase::AwaitingResponse { request_id: id.clone() };
        Ok(PendingRequest { id, text })
    }

    /// Settle the outstanding request with its outcome.
    ///
    /// Clears the typing indicator and appends exactly one bot message.
    /// Returns `false` (and changes nothing) if `request_id` is not the
    /// outstanding request.
    pub fn settle(&mut self, request_id: &str, outcome: Result<String, ChatError>, now_ms: f64) -> bool {
        match &self.phase {
            ChatPhase::AwaitingResponse { request_id: current } if current == request_id => {}
            _ => {
                log::warn!("ignoring reply for request {request_id}: not the outstanding request");
                return false;
            }
        }

        self.phase = ChatPhase::Idle;
        let text = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                log::warn!("{err}");
                err.bot_text()
            }
        };
        self.push_message(Role::Bot, &text, now_ms);
        true
    }
}
