#![deny(missing_docs)]
//! [`IdentityStore`](solace_types::IdentityStore) backends.
//!
//! - [`MemoryStore`]: `HashMap` behind a `RwLock`, gone when the process exits.
//! - [`FsStore`]: one JSON file per key under a root directory.

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;
