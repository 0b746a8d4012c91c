//! Filesystem-backed identity store.
//!
//! Keys are percent-encoded into filenames and each value is stored as a
//! JSON string in its own `.json` file. Survives process restarts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use solace_types::{IdentityStore, StoreError};

/// Filesystem-backed store.
///
/// Directory layout:
/// ```text
/// root/
///   <percent-encoded-key>.json
/// ```
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a new filesystem store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key_to_filename(key))
    }
}

/// Encode a key into a safe filename.
fn key_to_filename(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len() + 5);
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded.push_str(".json");
    encoded
}

#[async_trait]
impl IdentityStore for FsStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let value: String = serde_json::from_str(&contents)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Other(Box::new(e))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        let path = self.path_for(key);
        let contents =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "stored value");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::WriteFailed(e.to_string())),
        }
    }
}
