//! Progress export.

use chrono::NaiveDate;
use learnpath_core::{ModelError, Roadmap, Time, UserProgress};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A downloadable copy of the roadmap and the user's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    /// The curriculum
    pub roadmap: Roadmap,

    /// The user's progress overlay
    pub user_progress: UserProgress,

    /// When the export was taken
    pub exported_at: Time,
}

impl ExportSnapshot {
    /// Create a snapshot.
    pub fn new(roadmap: Roadmap, user_progress: UserProgress, exported_at: Time) -> Self {
        Self {
            roadmap,
            user_progress,
            exported_at,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse exported text, checking the same rules a persisted record obeys.
    pub fn parse(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.roadmap.validate()?;
        snapshot.user_progress.validate()?;
        if snapshot.user_progress.roadmap_id != snapshot.roadmap.id {
            return Err(ModelError::Mismatch("roadmap").into());
        }
        Ok(snapshot)
    }
}

/// File name offered for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("learnpath-progress-{}.json", date.format("%Y-%m-%d"))
}
