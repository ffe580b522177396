//! Progress aggregation.
//!
//! Completion percentages, stats, module summaries, filtering, and
//! completion estimates over the curriculum tree.

#![warn(missing_docs)]

pub mod engine;
pub mod stats;
pub mod filter;
pub mod estimator;

pub use engine::{
    compute_progress, effective_status, module_progress, percentage, roadmap_progress, Weighting,
};
pub use stats::{
    recent_topics, summarize_modules, ModuleSummary, ProgressStats, SummaryScope, TopicView,
    DEFAULT_RECENT_LIMIT,
};
pub use filter::{search_modules, TopicFilter};
pub use estimator::CompletionEstimator;
