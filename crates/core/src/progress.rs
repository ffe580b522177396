//! User progress overlay and settings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::id::{RoadmapId, TopicId, UserId};
use crate::roadmap::Roadmap;
use crate::topic::TopicStatus;
use crate::Time;

/// Status overrides keyed by topic.
pub type StatusOverrides = BTreeMap<TopicId, TopicStatus>;

/// The mutable overlay recording what the user has done.
///
/// `topic_statuses` is the authoritative current status of every topic it
/// mentions. `completed_topics` mirrors it: an id is in the set exactly when
/// its status is `Completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Owning user
    pub user_id: UserId,

    /// Roadmap this overlay applies to
    pub roadmap_id: RoadmapId,

    /// Topics currently completed
    pub completed_topics: BTreeSet<TopicId>,

    /// Current status per topic
    pub topic_statuses: StatusOverrides,

    /// Last mutation
    pub last_updated: Time,

    /// User settings
    pub settings: Settings,
}

impl UserProgress {
    /// Derive an overlay from the topics' intrinsic statuses.
    pub fn from_roadmap(roadmap: &Roadmap, user_id: UserId, settings: Settings, now: Time) -> Self {
        let mut progress = Self {
            user_id,
            roadmap_id: roadmap.id.clone(),
            completed_topics: BTreeSet::new(),
            topic_statuses: BTreeMap::new(),
            last_updated: now,
            settings,
        };
        for topic in roadmap.all_topics() {
            progress.apply(topic.id.clone(), topic.status);
        }
        progress
    }

    /// Record a status for a topic, keeping the completed set in step.
    pub fn set_status(&mut self, topic_id: TopicId, status: TopicStatus, now: Time) {
        self.apply(topic_id, status);
        self.last_updated = now;
    }

    fn apply(&mut self, topic_id: TopicId, status: TopicStatus) {
        if status.is_completed() {
            self.completed_topics.insert(topic_id.clone());
        } else {
            self.completed_topics.remove(&topic_id);
        }
        self.topic_statuses.insert(topic_id, status);
    }

    /// The recorded status for a topic, if any.
    pub fn status_of(&self, topic_id: &TopicId) -> Option<TopicStatus> {
        self.topic_statuses.get(topic_id).copied()
    }

    /// Whether a topic is completed.
    pub fn is_completed(&self, topic_id: &TopicId) -> bool {
        self.completed_topics.contains(topic_id)
    }

    /// Check the completed-set/status-map invariant.
    pub fn validate(&self) -> Result<()> {
        for id in &self.completed_topics {
            if self.topic_statuses.get(id) != Some(&TopicStatus::Completed) {
                return Err(ModelError::InconsistentProgress(id.to_string()));
            }
        }
        for (id, status) in &self.topic_statuses {
            if status.is_completed() && !self.completed_topics.contains(id) {
                return Err(ModelError::InconsistentProgress(id.to_string()));
            }
        }
        Ok(())
    }
}

/// Per-user settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Weight progress by estimated hours instead of topic count
    pub use_weighted_progress: bool,

    /// Display theme preference
    pub theme: Theme,
}

/// Display theme preference. Applying it is up to the display surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light
    Light,
    /// Dark
    Dark,
    /// Follow the host preference
    #[default]
    System,
}

impl Theme {
    /// Next theme in the light → dark → system cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    /// Resolve to dark or not, given the host preference.
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(ModelError::InvalidValue { kind: "theme", value: s.to_string() }),
        }
    }
}
