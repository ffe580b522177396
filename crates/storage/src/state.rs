//! The persisted record.

use learnpath_core::{ModelError, Roadmap, User, UserProgress};
use serde::{Deserialize, Serialize};

/// Default key the tracker's record is stored under.
pub const DEFAULT_KEY: &str = "roadmap-storage";

/// Everything the tracker persists between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// The curriculum
    pub roadmap: Roadmap,

    /// The user
    pub user: User,

    /// The user's progress overlay
    pub user_progress: UserProgress,
}

impl PersistedState {
    /// Bundle the three parts of the tracker's state.
    pub fn new(roadmap: Roadmap, user: User, user_progress: UserProgress) -> Self {
        Self {
            roadmap,
            user,
            user_progress,
        }
    }

    /// Check the record is usable: entity field rules, unique ids, a
    /// consistent overlay, and an overlay that belongs to this roadmap and user.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.roadmap.validate()?;
        self.user.validate()?;
        self.user_progress.validate()?;
        if self.user_progress.roadmap_id != self.roadmap.id {
            return Err(ModelError::Mismatch("roadmap"));
        }
        if self.user_progress.user_id != self.user.id {
            return Err(ModelError::Mismatch("user"));
        }
        Ok(())
    }

    /// Parse and validate a record from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let state: Self = serde_json::from_str(json)?;
        state.validate()?;
        Ok(state)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use learnpath_core::{
        Module, ModuleId, Role, RoadmapId, Settings, Topic, TopicId, TopicStatus, UserId,
    };

    pub(crate) fn sample_state() -> PersistedState {
        let now = Utc::now();
        let topics = vec![
            Topic::new(TopicId::new("t1").unwrap(), "Grid", now)
                .unwrap()
                .with_status(TopicStatus::Completed)
                .with_hours(2),
            Topic::new(TopicId::new("t2").unwrap(), "Flexbox", now).unwrap().with_hours(3),
        ];
        let roadmap = Roadmap::new(RoadmapId::new("r1").unwrap(), "Web", "1.0.0", now)
            .unwrap()
            .with_modules(vec![Module::new(ModuleId::new("m1").unwrap(), "CSS", now)
                .unwrap()
                .with_topics(topics)]);
        let user = User::new(UserId::new("u1").unwrap(), "Guest", "guest@example.com", Role::Student, now)
            .unwrap();
        let progress = UserProgress::from_roadmap(&roadmap, user.id.clone(), Settings::default(), now);
        PersistedState::new(roadmap, user, progress)
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(sample_state().validate().is_ok());
    }

    #[test]
    fn test_layout_uses_named_fields() {
        let value = serde_json::to_value(sample_state()).unwrap();
        assert!(value.get("roadmap").is_some());
        assert!(value.get("user").is_some());
        assert_eq!(value["userProgress"]["completedTopics"], serde_json::json!(["t1"]));
    }

    #[test]
    fn test_mismatched_user_rejected() {
        let mut state = sample_state();
        state.user_progress.user_id = UserId::new("someone-else").unwrap();
        assert_eq!(state.validate(), Err(ModelError::Mismatch("user")));
    }

    #[test]
    fn test_from_json_rejects_inconsistent_overlay() {
        let mut value = serde_json::to_value(sample_state()).unwrap();
        value["userProgress"]["completedTopics"] = serde_json::json!(["t1", "t2"]);

        let err = PersistedState::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, crate::StorageError::Invalid(ModelError::InconsistentProgress(_))));
    }

    #[test]
    fn test_from_json_rejects_broken_field_rules() {
        let good = serde_json::to_value(sample_state()).unwrap();

        let mut blank_title = good.clone();
        blank_title["roadmap"]["modules"][0]["topics"][0]["title"] = serde_json::json!("");
        assert!(matches!(
            PersistedState::from_json(&blank_title.to_string()),
            Err(crate::StorageError::Invalid(ModelError::EmptyField { entity: "topic", .. }))
        ));

        let mut bad_version = good.clone();
        bad_version["roadmap"]["version"] = serde_json::json!("not-semver");
        assert!(matches!(
            PersistedState::from_json(&bad_version.to_string()),
            Err(crate::StorageError::Invalid(ModelError::InvalidValue { kind: "roadmap version", .. }))
        ));

        let mut bad_email = good;
        bad_email["user"]["email"] = serde_json::json!("nope");
        assert!(matches!(
            PersistedState::from_json(&bad_email.to_string()),
            Err(crate::StorageError::Invalid(ModelError::InvalidValue { kind: "email", .. }))
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            PersistedState::from_json("{\"roadmap\": 3}"),
            Err(crate::StorageError::Json(_))
        ));
    }
}
