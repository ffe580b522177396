//! Construction and validation errors for learnpath entities.

/// Result alias for entity construction and validation.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised when an entity violates its field contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// An identifier was empty or whitespace only
    #[error("{0} must not be empty")]
    EmptyId(&'static str),

    /// A required text field was empty
    #[error("{entity} {field} must not be empty")]
    EmptyField {
        /// Entity kind
        entity: &'static str,
        /// Field name
        field: &'static str,
    },

    /// A value outside its allowed set
    #[error("invalid {kind}: {value:?}")]
    InvalidValue {
        /// What was being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// The same identifier appears twice in one roadmap
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    /// `completedTopics` and `topicStatuses` disagree for a topic
    #[error("completed set and status map disagree for topic {0}")]
    InconsistentProgress(String),

    /// The progress overlay belongs to a different roadmap or user
    #[error("progress overlay does not match {0}")]
    Mismatch(&'static str),
}

/// Reject empty or whitespace-only text for a required field.
pub(crate) fn require(entity: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::EmptyField { entity, field });
    }
    Ok(())
}
