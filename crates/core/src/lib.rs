//! learnpath core data models.
//!
//! This crate defines the curriculum tree (roadmap, modules, topics), the
//! user, and the progress overlay, together with the traversal helpers the
//! rest of the workspace builds on.

#![warn(missing_docs)]

// Core identities
mod id;
mod error;

// Curriculum tree
mod topic;
mod module;
mod roadmap;
pub mod tree;

// User state
mod user;
mod progress;

// Re-exports
pub use id::*;
pub use error::{ModelError, Result};

pub use topic::{Topic, TopicStatus, Link, LinkCategory};
pub use module::Module;
pub use roadmap::Roadmap;
pub use tree::{flatten_topics, flatten_modules, find_module, find_topic};

pub use user::{User, Role};
pub use progress::{UserProgress, Settings, Theme, StatusOverrides};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
