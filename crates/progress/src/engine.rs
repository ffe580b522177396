//! Completion percentage calculation.
//!
//! Percentages are integers in `[0, 100]`, rounded half away from zero
//! (12.5 becomes 13). The rounding is done in integer arithmetic so boundary
//! values never depend on floating point representation.

use learnpath_core::{ModuleId, Module, Roadmap, StatusOverrides, Topic, TopicStatus};
use serde::{Deserialize, Serialize};

/// How topics are weighted when computing a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    /// Every topic counts once
    #[default]
    Count,
    /// Topics count by their estimated hours
    Hours,
}

impl From<bool> for Weighting {
    fn from(use_weighted_progress: bool) -> Self {
        if use_weighted_progress {
            Weighting::Hours
        } else {
            Weighting::Count
        }
    }
}

impl Weighting {
    fn weight(self, topic: &Topic) -> u64 {
        match self {
            Weighting::Count => 1,
            Weighting::Hours => u64::from(topic.estimated_hours),
        }
    }
}

/// A topic's status after applying the user's override.
pub fn effective_status(topic: &Topic, overrides: &StatusOverrides) -> TopicStatus {
    overrides.get(&topic.id).copied().unwrap_or(topic.status)
}

/// Completion percentage of a topic set.
///
/// Returns 0 for an empty set, and 0 in hours mode when every topic has zero
/// estimated hours.
pub fn compute_progress<'a, I>(topics: I, overrides: &StatusOverrides, weighting: Weighting) -> u8
where
    I: IntoIterator<Item = &'a Topic>,
{
    let mut total = 0u64;
    let mut completed = 0u64;
    for topic in topics {
        let weight = weighting.weight(topic);
        total += weight;
        if effective_status(topic, overrides).is_completed() {
            completed += weight;
        }
    }
    percentage(completed, total)
}

/// `round(100 * part / whole)`, half away from zero; 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((200 * part + whole) / (2 * whole)) as u8
}

/// Progress of a module and all its descendants; 0 when the module is unknown.
pub fn module_progress(
    modules: &[Module],
    id: &ModuleId,
    overrides: &StatusOverrides,
    weighting: Weighting,
) -> u8 {
    match learnpath_core::find_module(modules, id) {
        Some(module) => compute_progress(module.all_topics(), overrides, weighting),
        None => 0,
    }
}

/// Progress over every topic in the roadmap.
pub fn roadmap_progress(roadmap: &Roadmap, overrides: &StatusOverrides, weighting: Weighting) -> u8 {
    compute_progress(roadmap.all_topics(), overrides, weighting)
}
