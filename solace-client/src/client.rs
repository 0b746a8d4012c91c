//! Chat endpoint client struct and builder.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Response;
use solace_types::{ChatError, ChatRequest, JsonReply, ReplyMode};

use crate::error::{map_http_status, map_reqwest_error};

/// Default chat endpoint: a local development backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";

/// Client for a chat endpoint.
///
/// # Example
///
/// ```no_run
/// use solace_client::{ChatClient, ReplyMode};
///
/// let client = ChatClient::new("https://chat.example.com/chat")
///     .mode(ReplyMode::Json);
/// ```
#[derive(Debug, Clone)]
pub struct ChatClient {
    /// Full URL requests are POSTed to.
    pub(crate) endpoint: String,
    /// Whether the endpoint is asked for a stream or a single JSON body.
    pub(crate) mode: ReplyMode,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl ChatClient {
    /// Create a client for the given endpoint in streaming mode.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            mode: ReplyMode::Stream,
            client: reqwest::Client::new(),
        }
    }

    /// Choose how replies are requested.
    pub fn mode(mut self, mode: ReplyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, TLS roots).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The reply mode in use.
    pub fn reply_mode(&self) -> ReplyMode {
        self.mode
    }

    /// POST a request and check the status.
    ///
    /// On a 2xx status the response is returned with its body unread.
    /// Any other status is read to text and reported as a transport error.
    pub async fn post(&self, request: &ChatRequest) -> Result<Response, ChatError> {
        tracing::debug!(
            url = %self.endpoint,
            mode = ?self.mode,
            user_id = %request.user_id(),
            "sending chat request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, self.mode.accept())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "chat response headers received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "chat endpoint returned an error");
            return Err(map_http_status(status, &body));
        }

        Ok(response)
    }

    /// Read a non-streamed reply body.
    pub async fn read_json_reply(response: Response) -> Result<JsonReply, ChatError> {
        let text = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&text)
            .map_err(|e| ChatError::Transport(format!("invalid JSON response: {e}")))
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
