//! Seed data for first run.
//!
//! Produces a curated roadmap with randomized statuses, efforts and creation
//! dates, a guest user, and the matching progress overlay. The random source
//! and clock are injectable so generated shapes can be asserted exactly.

#![warn(missing_docs)]

pub mod catalog;
pub mod generator;

pub use generator::{Seed, SeedConfig, SeedGenerator, Seeder};

/// Errors raised while generating seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A generated entity violated its field contract
    #[error("invalid generated entity: {0}")]
    Model(#[from] learnpath_core::ModelError),

    /// Generation failed for another reason
    #[error("{0}")]
    Other(String),
}
