//! Internal error helpers for mapping HTTP/reqwest errors to [`ChatError`].

use solace_types::ChatError;

/// Map a non-2xx status and its body to a transport error.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ChatError {
    ChatError::Transport(format!(
        "HTTP error! status: {}, body: {body}",
        status.as_u16()
    ))
}

/// Map a [`reqwest::Error`] to a transport error.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        ChatError::Transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        ChatError::Transport(format!("connection failed: {err}"))
    } else {
        ChatError::Transport(format!("network error: {err}"))
    }
}
