//! HTTP chat client for solace.
//!
//! Posts one message at a time to a chat endpoint and renders the reply,
//! either as a single JSON payload or as a `text/event-stream` body whose
//! `data:` frames are appended to the display as they arrive.
//!
//! # Usage
//!
//! ```no_run
//! use solace_client::{ChatClient, ChatSession};
//! use solace_types::{Composer, DisplaySink};
//!
//! struct Stdout;
//! impl DisplaySink for Stdout {
//!     fn reset(&mut self) {}
//!     fn append_text(&mut self, text: &str) { print!("{text}") }
//! }
//!
//! struct NoInput;
//! impl Composer for NoInput {
//!     fn set_enabled(&mut self, _enabled: bool) {}
//!     fn clear_input(&mut self) {}
//! }
//!
//! # async fn run() -> Result<(), solace_types::ChatError> {
//! let store = solace_state::MemoryStore::new();
//! let client = ChatClient::new("http://127.0.0.1:5000/chat");
//! let mut session = ChatSession::connect(client, &store, Stdout, NoInput).await?;
//! session.send("I had a long day.").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub(crate) mod error;
pub mod identity;
pub mod session;
pub mod streaming;

pub use client::ChatClient;
pub use identity::ClientIdentity;
pub use session::{ChatSession, SessionState};
pub use streaming::{FrameDecoder, FrameOutcome, consume_stream, parse_frame};

// Re-export solace-types for convenience
pub use solace_types::{ChatError, ChatRequest, ReplyMode, StreamError, Transcript};
