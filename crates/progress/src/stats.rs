//! Aggregate statistics over a topic set and per-module summaries.

use learnpath_core::{tree, Module, ModuleId, StatusOverrides, Topic, TopicStatus};
use serde::Serialize;

use crate::engine::{compute_progress, effective_status, Weighting};

/// Default number of entries returned by [`recent_topics`].
pub const DEFAULT_RECENT_LIMIT: usize = 8;

/// Counts and hours for a topic set, by effective status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    /// All topics
    pub total_topics: usize,

    /// Topics with effective status `Completed`
    pub completed_topics: usize,

    /// Topics with effective status `Now`
    pub in_progress_topics: usize,

    /// Topics with effective status `Future`
    pub future_topics: usize,

    /// Sum of estimated hours
    pub total_hours: u64,

    /// Estimated hours of completed topics
    pub completed_hours: u64,

    /// Estimated hours still to go
    pub remaining_hours: u64,

    /// Percentage under the requested weighting
    pub percentage: u8,
}

impl ProgressStats {
    /// Collect stats for a topic set.
    pub fn collect<'a, I>(topics: I, overrides: &StatusOverrides, weighting: Weighting) -> Self
    where
        I: IntoIterator<Item = &'a Topic>,
    {
        let topics: Vec<&Topic> = topics.into_iter().collect();
        let mut stats = Self::default();

        for topic in &topics {
            let hours = u64::from(topic.estimated_hours);
            stats.total_topics += 1;
            stats.total_hours += hours;
            match effective_status(topic, overrides) {
                TopicStatus::Completed => {
                    stats.completed_topics += 1;
                    stats.completed_hours += hours;
                }
                TopicStatus::Now => stats.in_progress_topics += 1,
                TopicStatus::Future => stats.future_topics += 1,
            }
        }

        stats.remaining_hours = stats.total_hours - stats.completed_hours;
        stats.percentage = compute_progress(topics, overrides, weighting);
        stats
    }
}

/// Which modules [`summarize_modules`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryScope {
    /// Only the top-level modules
    TopLevel,
    /// Every module, pre-order
    All,
}

/// One row of the module overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSummary {
    /// Module identifier
    pub id: ModuleId,

    /// Module title
    pub title: String,

    /// Nesting depth; top-level modules are 0
    pub depth: usize,

    /// Topics in the module and all its descendants
    pub topic_count: usize,

    /// Effort for the subtree
    pub total_hours: u32,

    /// Completion percentage for the subtree
    pub progress: u8,
}

impl ModuleSummary {
    fn of(module: &Module, depth: usize, overrides: &StatusOverrides, weighting: Weighting) -> Self {
        let topics = module.all_topics();
        Self {
            id: module.id.clone(),
            title: module.title.clone(),
            depth,
            topic_count: topics.len(),
            total_hours: module.total_hours(),
            progress: compute_progress(topics, overrides, weighting),
        }
    }
}

/// Summaries for the modules in scope, in traversal order.
pub fn summarize_modules(
    modules: &[Module],
    overrides: &StatusOverrides,
    weighting: Weighting,
    scope: SummaryScope,
) -> Vec<ModuleSummary> {
    tree::walk(modules)
        .filter(|(depth, _)| scope == SummaryScope::All || *depth == 0)
        .map(|(depth, module)| ModuleSummary::of(module, depth, overrides, weighting))
        .collect()
}

/// A topic paired with its effective status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView<'a> {
    /// The topic
    pub topic: &'a Topic,
    /// Status after applying overrides
    pub status: TopicStatus,
}

/// The most recently created topics, newest first.
///
/// Topics created at the same instant keep their traversal order.
pub fn recent_topics<'a, I>(topics: I, overrides: &StatusOverrides, limit: usize) -> Vec<TopicView<'a>>
where
    I: IntoIterator<Item = &'a Topic>,
{
    let mut topics: Vec<&Topic> = topics.into_iter().collect();
    topics.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    topics
        .into_iter()
        .take(limit)
        .map(|topic| TopicView {
            topic,
            status: effective_status(topic, overrides),
        })
        .collect()
}
