//! Store errors.

use learnpath_core::{ModelError, TopicId};
use learnpath_seed::SeedError;
use learnpath_storage::StorageError;

/// Errors reported by the progress store.
///
/// Mutators that return an error leave the in-memory state untouched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store has not finished initializing
    #[error("store is not ready")]
    NotReady,

    /// No topic with this id exists in the roadmap
    #[error("topic not found: {0}")]
    TopicNotFound(TopicId),

    /// Generating fresh data failed
    #[error("seed generation failed: {0}")]
    Seed(#[from] SeedError),

    /// Reading or validating stored data failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Parsed data violates a model rule
    #[error("invalid data: {0}")]
    Invalid(#[from] ModelError),

    /// Serializing or parsing a snapshot failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
