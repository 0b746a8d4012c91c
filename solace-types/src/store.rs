//! Persistence for small client-local values.

use async_trait::async_trait;

use crate::error::StoreError;

/// A tiny key/value store for client-local values such as the
/// identity token.
///
/// Implementations:
/// - `MemoryStore`: HashMap (testing, ephemeral)
/// - `FsStore`: one file per key (survives restarts)
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Read a value by key. Returns None if the key doesn't exist.
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value. Creates or overwrites.
    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. No-op if the key doesn't exist.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: IdentityStore + ?Sized> IdentityStore for std::sync::Arc<T> {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key).await
    }
}
