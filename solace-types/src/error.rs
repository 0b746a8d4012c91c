//! Error types for each layer of the client.

use thiserror::Error;

/// Errors returned by a chat request.
///
/// By the time one of these is returned from a session, it has already
/// been reported to the display sink.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChatError {
    /// The message was rejected locally. No request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request could not be sent, the endpoint answered with a
    /// non-2xx status, or the body failed mid-read.
    #[error("{0}")]
    Transport(String),

    /// The client-local identity could not be loaded or persisted.
    #[error("identity store error: {0}")]
    Identity(#[from] StoreError),
}

impl ChatError {
    /// Whether this error was raised before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::Validation(_))
    }

    /// Whether this error came from the transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Transport(_))
    }
}

/// Terminal failures of a reply stream.
///
/// A single malformed frame is not one of these: frames are skipped,
/// the stream carries on.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Reading the next chunk of the body failed.
    #[error("stream read error: {0}")]
    Read(String),
}

impl From<StreamError> for ChatError {
    fn from(err: StreamError) -> Self {
        ChatError::Transport(err.to_string())
    }
}

/// Identity store errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A write operation failed.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// The stored bytes could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_cause_verbatim() {
        let err = ChatError::Transport("HTTP error! status: 500, body: boom".into());
        assert_eq!(err.to_string(), "HTTP error! status: 500, body: boom");
        assert!(err.is_transport());
        assert!(!err.is_validation());
    }

    #[test]
    fn stream_error_maps_to_transport() {
        let err: ChatError = StreamError::Read("connection reset".into()).into();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "stream read error: connection reset");
    }

    #[test]
    fn store_error_wraps_into_identity() {
        let err: ChatError = StoreError::WriteFailed("disk full".into()).into();
        assert!(matches!(err, ChatError::Identity(StoreError::WriteFailed(_))));
        assert_eq!(err.to_string(), "identity store error: write failed: disk full");
    }
}
