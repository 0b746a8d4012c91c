//! # solace-types — shared vocabulary for the solace chat client
//!
//! Everything that more than one solace crate needs to agree on lives here:
//!
//! | Module | Types | What it does |
//! |--------|-------|-------------|
//! | [`request`] | [`ChatRequest`], [`JsonReply`] | The wire shapes sent to and read from the chat endpoint |
//! | [`transcript`] | [`Transcript`] | Accumulated reply text for one request |
//! | [`display`] | [`DisplaySink`], [`Composer`] | Where replies are rendered and where input comes from |
//! | [`store`] | [`IdentityStore`] | Persistence for the client-local identity |
//! | [`error`] | [`ChatError`], [`StreamError`], [`StoreError`] | Failure kinds |
//!
//! The traits are capabilities injected into a session rather than
//! ambient globals, so a session can be driven in tests with in-memory
//! fakes.

#![deny(missing_docs)]

pub mod display;
pub mod error;
pub mod request;
pub mod store;
pub mod transcript;

pub use display::{Composer, DisplaySink};
pub use error::{ChatError, StoreError, StreamError};
pub use request::{ChatRequest, JsonReply, ReplyMode};
pub use store::IdentityStore;
pub use transcript::Transcript;
