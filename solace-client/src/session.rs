//! One chat conversation: validation, the in-flight guard, and rendering.

use futures::StreamExt;
use solace_types::request::EMPTY_MESSAGE_NOTICE;
use solace_types::{
    ChatError, ChatRequest, Composer, DisplaySink, IdentityStore, ReplyMode, Transcript,
};

use crate::client::ChatClient;
use crate::identity::ClientIdentity;
use crate::streaming::stream_response;

/// Where a session is in its request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready for the next message.
    Idle,
    /// Request sent, waiting for response headers.
    Sending,
    /// Reading the response body.
    Streaming,
}

/// Marks a request as in flight for as long as it lives.
///
/// Creating it disables the composer and moves to `Sending`. Dropping it,
/// on any exit path, re-enables the composer and then returns to `Idle`.
struct InFlight<'a, C: Composer> {
    composer: &'a mut C,
    state: &'a mut SessionState,
}

impl<'a, C: Composer> InFlight<'a, C> {
    fn begin(composer: &'a mut C, state: &'a mut SessionState) -> Self {
        composer.set_enabled(false);
        *state = SessionState::Sending;
        Self { composer, state }
    }

    fn streaming(&mut self) {
        *self.state = SessionState::Streaming;
    }

    fn clear_input(&mut self) {
        self.composer.clear_input();
    }
}

impl<C: Composer> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        self.composer.set_enabled(true);
        *self.state = SessionState::Idle;
    }
}

/// A chat session bound to one endpoint, one identity, one display and
/// one composer.
///
/// `send` takes `&mut self`, so at most one request is in flight.
pub struct ChatSession<D, C> {
    client: ChatClient,
    identity: ClientIdentity,
    sink: D,
    composer: C,
    state: SessionState,
    transcript: Transcript,
}

impl<D: DisplaySink, C: Composer> ChatSession<D, C> {
    /// Create a session with an already-resolved identity.
    pub fn new(client: ChatClient, identity: ClientIdentity, sink: D, composer: C) -> Self {
        Self {
            client,
            identity,
            sink,
            composer,
            state: SessionState::Idle,
            transcript: Transcript::new(),
        }
    }

    /// Create a session, loading (or generating) the identity from `store`.
    pub async fn connect<S>(
        client: ChatClient,
        store: &S,
        sink: D,
        composer: C,
    ) -> Result<Self, ChatError>
    where
        S: IdentityStore + ?Sized,
    {
        let identity = ClientIdentity::load_or_create(store).await?;
        Ok(Self::new(client, identity, sink, composer))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Reply text received for the most recent request.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The identity sent with every request.
    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    /// The display sink.
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Mutable access to the display sink, e.g. to print a greeting.
    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    /// The composer.
    pub fn composer(&self) -> &C {
        &self.composer
    }

    /// Mutable access to the composer.
    pub fn composer_mut(&mut self) -> &mut C {
        &mut self.composer
    }

    /// Send one message and render the reply.
    ///
    /// A message that is empty after trimming is rejected with a notice and
    /// no request. Otherwise the composer is disabled, the display reset,
    /// and the reply appended fragment by fragment as it arrives. On
    /// failure `Error: <cause>` is appended after whatever had already been
    /// rendered. Either way the error has been shown by the time it is
    /// returned, and the composer is enabled again.
    pub async fn send(&mut self, message: &str) -> Result<Transcript, ChatError> {
        let request = match ChatRequest::new(message, self.identity.as_str()) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("rejected empty message");
                self.sink.notice(EMPTY_MESSAGE_NOTICE);
                return Err(err);
            }
        };

        let Self {
            client,
            sink,
            composer,
            state,
            transcript,
            ..
        } = self;

        let mut in_flight = InFlight::begin(composer, state);
        *transcript = Transcript::new();
        sink.reset();

        match exchange(client, &request, sink, transcript, &mut in_flight).await {
            Ok(()) => {
                in_flight.clear_input();
                drop(in_flight);
                tracing::info!(
                    fragments = transcript.fragments(),
                    chars = transcript.as_str().len(),
                    "reply complete"
                );
                Ok(transcript.clone())
            }
            Err(err) => {
                tracing::error!(error = %err, "chat request failed");
                sink.append_text(&format!("Error: {err}"));
                drop(in_flight);
                Err(err)
            }
        }
    }
}

/// Post the request and render the reply into `sink` and `transcript`.
async fn exchange<D: DisplaySink, C: Composer>(
    client: &ChatClient,
    request: &ChatRequest,
    sink: &mut D,
    transcript: &mut Transcript,
    in_flight: &mut InFlight<'_, C>,
) -> Result<(), ChatError> {
    let response = client.post(request).await?;
    in_flight.streaming();

    match client.reply_mode() {
        ReplyMode::Json => {
            let reply = ChatClient::read_json_reply(response).await?;
            let text = reply.display_text();
            transcript.push(text);
            sink.append_text(text);
        }
        ReplyMode::Stream => {
            let mut fragments = std::pin::pin!(stream_response(response));
            while let Some(fragment) = fragments.next().await {
                let fragment = fragment?;
                transcript.push(&fragment);
                sink.append_text(&fragment);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        notices: Vec<String>,
        resets: usize,
    }

    impl DisplaySink for RecordingSink {
        fn reset(&mut self) {
            self.resets += 1;
        }

        fn append_text(&mut self, _text: &str) {}

        fn notice(&mut self, text: &str) {
            self.notices.push(text.to_string());
        }
    }

    #[derive(Default)]
    struct Toggle {
        history: Vec<bool>,
        cleared: usize,
    }

    impl Composer for Toggle {
        fn set_enabled(&mut self, enabled: bool) {
            self.history.push(enabled);
        }

        fn clear_input(&mut self) {
            self.cleared += 1;
        }
    }

    #[test]
    fn in_flight_guard_restores_on_drop() {
        let mut composer = Toggle::default();
        let mut state = SessionState::Idle;
        {
            let mut guard = InFlight::begin(&mut composer, &mut state);
            guard.streaming();
        }
        assert_eq!(state, SessionState::Idle);
        assert_eq!(composer.history, vec![false, true]);
    }

    #[tokio::test]
    async fn empty_message_never_touches_the_network() {
        // Unroutable endpoint: a request would fail loudly as a transport error.
        let client = ChatClient::new("http://127.0.0.1:1/chat");
        let mut session = ChatSession::new(
            client,
            ClientIdentity::from("user_test"),
            RecordingSink::default(),
            Toggle::default(),
        );

        let err = session.send("   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.sink().notices, vec![EMPTY_MESSAGE_NOTICE]);
        assert_eq!(session.sink().resets, 0);
        assert!(session.composer().history.is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }
}
