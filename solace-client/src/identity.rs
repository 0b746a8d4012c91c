//! Client-local identity.
//!
//! A per-installation token that lets the backend tell chat sessions
//! apart. It is not a credential.

use solace_types::{IdentityStore, StoreError};

/// Key the identity is persisted under.
pub const IDENTITY_KEY: &str = "solace_user_id";

/// Length of the random suffix after `user_`.
const SUFFIX_LEN: usize = 9;

/// An opaque client identity such as `user_3f9a1c07b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// Read the identity from the store, generating and persisting one
    /// if none exists yet.
    ///
    /// Repeated calls against the same store return the same value.
    pub async fn load_or_create<S>(store: &S) -> Result<Self, StoreError>
    where
        S: IdentityStore + ?Sized,
    {
        if let Some(existing) = store.read(IDENTITY_KEY).await? {
            if !existing.trim().is_empty() {
                tracing::debug!(user_id = %existing, "loaded client identity");
                return Ok(Self(existing));
            }
            tracing::warn!("stored client identity is blank, regenerating");
        }

        let identity = Self::generate();
        store.write(IDENTITY_KEY, identity.as_str()).await?;
        tracing::info!(user_id = %identity, "generated client identity");
        Ok(identity)
    }

    /// Generate a fresh identity without persisting it.
    pub fn generate() -> Self {
        let raw = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("user_{}", &raw[..SUFFIX_LEN]))
    }

    /// Borrow the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientIdentity {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
