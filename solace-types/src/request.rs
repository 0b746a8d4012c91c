//! Wire shapes exchanged with the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Notice shown when the user tries to send an empty message.
pub const EMPTY_MESSAGE_NOTICE: &str = "Please enter a message.";

/// Shown when a JSON reply carries neither a reply nor an error.
pub const UNEXPECTED_REPLY_NOTICE: &str = "Unexpected response format";

/// How the endpoint is asked to answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    /// `Accept: text/event-stream`, rendered incrementally.
    #[default]
    Stream,
    /// `Accept: application/json`, rendered once.
    Json,
}

impl ReplyMode {
    /// Value of the `Accept` header for this mode.
    pub fn accept(self) -> &'static str {
        match self {
            ReplyMode::Stream => "text/event-stream",
            ReplyMode::Json => "application/json",
        }
    }
}

/// Body of one chat POST.
///
/// Only constructible through [`ChatRequest::new`], which rejects
/// messages that are empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    message: String,
    user_id: String,
}

impl ChatRequest {
    /// Build a request, trimming the message.
    pub fn new(message: &str, user_id: impl Into<String>) -> Result<Self, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::Validation(EMPTY_MESSAGE_NOTICE.into()));
        }
        Ok(Self {
            message: message.to_string(),
            user_id: user_id.into(),
        })
    }

    /// The trimmed message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The opaque client identity sent alongside the message.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// A non-streamed reply.
///
/// Backends disagree on the field name, so `reply` is accepted as an
/// alias for `response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JsonReply {
    /// The assistant's answer.
    #[serde(default, alias = "reply")]
    pub response: Option<String>,
    /// A backend-reported error message.
    #[serde(default)]
    pub error: Option<String>,
}

impl JsonReply {
    /// The text to display for this reply.
    pub fn display_text(&self) -> &str {
        self.response
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(UNEXPECTED_REPLY_NOTICE)
    }
}
