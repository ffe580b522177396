//! Storage trait abstraction.

use async_trait::async_trait;
use learnpath_core::ModelError;

use crate::state::PersistedState;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record parsed but is structurally invalid
    #[error("invalid record: {0}")]
    Invalid(#[from] ModelError),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Durable home for the tracker's state.
///
/// Records are addressed by a short key. Backends return `Ok(None)` for a key
/// that was never written and an error for a record that exists but cannot
/// be used.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the record stored under `key`.
    async fn load_state(&self, key: &str) -> Result<Option<PersistedState>>;

    /// Save (create or replace) the record under `key`.
    async fn save_state(&mut self, key: &str, state: &PersistedState) -> Result<()>;

    /// Delete the record under `key`. Deleting a missing record is not an error.
    async fn delete_state(&mut self, key: &str) -> Result<()>;
}

/// Reject keys that are not safe as a single file name.
pub(crate) fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(StorageError::Other(format!("invalid storage key: {key:?}")));
    }
    Ok(())
}
