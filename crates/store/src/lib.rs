//! The learnpath progress store.
//!
//! Holds the roadmap, user and progress overlay behind an explicit
//! lifecycle, applies mutations, answers progress queries, and writes state
//! back through a [`learnpath_storage::Storage`] after every change.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod snapshot;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use snapshot::{export_file_name, ExportSnapshot};
pub use store::{Lifecycle, ProgressStore};
