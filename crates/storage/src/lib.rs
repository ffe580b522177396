//! Storage abstraction and implementations for learnpath.
//!
//! This crate provides a trait-based storage interface for the tracker's
//! single persisted record, with a JSON file backend and an in-memory one.

#![warn(missing_docs)]

pub mod trait_;
pub mod state;
pub mod json_storage;
pub mod memory;

pub use trait_::{Storage, StorageError, Result};
pub use state::{PersistedState, DEFAULT_KEY};
pub use json_storage::JsonStorage;
pub use memory::MemoryStorage;
