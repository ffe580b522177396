//! The progress store - owns the roadmap, user and progress overlay.

use chrono::Utc;
use learnpath_core::{Module, ModuleId, Roadmap, Theme, Topic, TopicId, TopicStatus, User, UserProgress};
use learnpath_progress::{
    self as progress, ModuleSummary, ProgressStats, SummaryScope, TopicFilter, TopicView, Weighting,
};
use learnpath_seed::Seeder;
use learnpath_storage::{PersistedState, Storage};
use tracing::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::snapshot::ExportSnapshot;

/// Where the store is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Nothing loaded
    Uninitialized,
    /// Restoring or generating state
    Loading,
    /// Roadmap, user and progress are all available
    Ready,
}

/// The stateful core of the tracker.
///
/// ```text
/// Uninitialized → Loading → Ready
/// ```
///
/// The first `initialize` restores the persisted record when one is usable;
/// every later `initialize` regenerates from the seeder. Successful mutations
/// are written back through the storage collaborator.
pub struct ProgressStore<S: Storage, G: Seeder> {
    storage: S,
    seeder: G,
    config: StoreConfig,
    lifecycle: Lifecycle,
    state: Option<PersistedState>,
    restore_attempted: bool,
}

impl<S: Storage, G: Seeder> ProgressStore<S, G> {
    /// Create an uninitialized store.
    pub fn new(storage: S, seeder: G) -> Self {
        Self {
            storage,
            seeder,
            config: StoreConfig::default(),
            lifecycle: Lifecycle::Uninitialized,
            state: None,
            restore_attempted: false,
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The storage collaborator.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage collaborator.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Load or generate state and become ready.
    pub async fn initialize(&mut self) -> Result<()> {
        info!("Initializing progress store");
        self.lifecycle = Lifecycle::Loading;
        self.state = None;

        let restored = if self.restore_attempted {
            None
        } else {
            self.restore_attempted = true;
            self.restore().await
        };

        let state = match restored {
            Some(state) => state,
            None => match self.seeder.generate() {
                Ok(seed) => PersistedState::new(seed.roadmap, seed.user, seed.user_progress),
                Err(e) => {
                    error!("Failed to initialize store: {}", e);
                    self.lifecycle = Lifecycle::Uninitialized;
                    return Err(e.into());
                }
            },
        };

        info!(
            "Store ready: roadmap {} for user {}",
            state.roadmap.id, state.user.id
        );
        self.state = Some(state);
        self.lifecycle = Lifecycle::Ready;
        self.persist().await;
        Ok(())
    }

    /// Delete the persisted record, then generate fresh state.
    ///
    /// A failed delete is logged; the new state still overwrites the record
    /// when auto-persist is on.
    pub async fn regenerate(&mut self) -> Result<()> {
        self.restore_attempted = true;
        if let Err(e) = self.storage.delete_state(&self.config.key).await {
            warn!("Failed to delete persisted state under {}: {}", self.config.key, e);
        }
        info!("Cleared persisted state under {}", self.config.key);
        self.initialize().await
    }

    async fn restore(&mut self) -> Option<PersistedState> {
        match self.storage.load_state(&self.config.key).await {
            Ok(Some(state)) => {
                info!("Restored persisted state from {}", self.config.key);
                Some(state)
            }
            Ok(None) => {
                debug!("No persisted state under {}", self.config.key);
                None
            }
            Err(e) => {
                warn!("Ignoring unusable persisted state under {}: {}", self.config.key, e);
                None
            }
        }
    }

    async fn persist(&mut self) {
        if !self.config.auto_persist {
            return;
        }
        let Some(state) = &self.state else {
            return;
        };
        if let Err(e) = self.storage.save_state(&self.config.key, state).await {
            warn!("Failed to persist state under {}: {}", self.config.key, e);
        }
    }

    fn ready(&self) -> Option<&PersistedState> {
        match self.lifecycle {
            Lifecycle::Ready => self.state.as_ref(),
            _ => None,
        }
    }

    fn ready_mut(&mut self) -> Result<&mut PersistedState> {
        match self.lifecycle {
            Lifecycle::Ready => self.state.as_mut().ok_or(StoreError::NotReady),
            _ => Err(StoreError::NotReady),
        }
    }

    // ---- mutations ----

    /// Record a new status for a topic.
    pub async fn set_topic_status(&mut self, topic_id: &TopicId, status: TopicStatus) -> Result<()> {
        let state = self.ready_mut()?;
        if state.roadmap.find_topic(topic_id).is_none() {
            return Err(StoreError::TopicNotFound(topic_id.clone()));
        }
        state.user_progress.set_status(topic_id.clone(), status, Utc::now());
        debug!("Topic {} is now {}", topic_id, status);

        self.persist().await;
        Ok(())
    }

    /// Flip between count and hours weighting; returns the new flag.
    pub async fn toggle_weighted_progress(&mut self) -> Result<bool> {
        let state = self.ready_mut()?;
        let settings = &mut state.user_progress.settings;
        settings.use_weighted_progress = !settings.use_weighted_progress;
        let enabled = settings.use_weighted_progress;
        debug!("Weighted progress {}", if enabled { "on" } else { "off" });

        self.persist().await;
        Ok(enabled)
    }

    /// Set the theme preference.
    pub async fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let state = self.ready_mut()?;
        state.user_progress.settings.theme = theme;
        debug!("Theme set to {}", theme);

        self.persist().await;
        Ok(())
    }

    /// Advance the theme preference; returns the new theme.
    pub async fn cycle_theme(&mut self) -> Result<Theme> {
        let state = self.ready_mut()?;
        let theme = state.user_progress.settings.theme.next();
        state.user_progress.settings.theme = theme;
        debug!("Theme cycled to {}", theme);

        self.persist().await;
        Ok(theme)
    }

    /// Replace the roadmap and progress with fresh generated ones, keeping
    /// the current user and settings.
    pub async fn reset_progress(&mut self) -> Result<()> {
        self.ready_mut()?;
        let seed = self.seeder.generate().map_err(|e| {
            error!("Failed to generate fresh roadmap: {}", e);
            StoreError::from(e)
        })?;

        let state = self.ready_mut()?;
        let mut user_progress = seed.user_progress;
        user_progress.user_id = state.user.id.clone();
        user_progress.settings = state.user_progress.settings;
        state.roadmap = seed.roadmap;
        state.user_progress = user_progress;
        info!("Progress reset; new roadmap {}", state.roadmap.id);

        self.persist().await;
        Ok(())
    }

    /// Pretty JSON holding the roadmap, the progress overlay and the export time.
    pub fn export_snapshot(&self) -> Result<String> {
        let state = self.ready().ok_or(StoreError::NotReady)?;
        ExportSnapshot::new(state.roadmap.clone(), state.user_progress.clone(), Utc::now()).to_json()
    }

    // ---- queries ----

    /// The roadmap, once ready.
    pub fn roadmap(&self) -> Option<&Roadmap> {
        self.ready().map(|s| &s.roadmap)
    }

    /// The user, once ready.
    pub fn user(&self) -> Option<&User> {
        self.ready().map(|s| &s.user)
    }

    /// The progress overlay, once ready.
    pub fn user_progress(&self) -> Option<&UserProgress> {
        self.ready().map(|s| &s.user_progress)
    }

    /// Whether the user has the mentor role.
    pub fn is_mentor(&self) -> bool {
        self.user().is_some_and(User::is_mentor)
    }

    fn weighting(&self) -> Weighting {
        self.user_progress()
            .map(|p| Weighting::from(p.settings.use_weighted_progress))
            .unwrap_or_default()
    }

    /// Completion percentage over the whole roadmap; 0 when not ready.
    pub fn roadmap_progress(&self) -> u8 {
        match self.ready() {
            Some(state) => progress::roadmap_progress(
                &state.roadmap,
                &state.user_progress.topic_statuses,
                self.weighting(),
            ),
            None => 0,
        }
    }

    /// Completion percentage of a module subtree; 0 when unknown or not ready.
    pub fn module_progress(&self, module_id: &ModuleId) -> u8 {
        match self.ready() {
            Some(state) => progress::module_progress(
                &state.roadmap.modules,
                module_id,
                &state.user_progress.topic_statuses,
                self.weighting(),
            ),
            None => 0,
        }
    }

    /// Completion percentage of an arbitrary topic set under the current
    /// overrides and weighting.
    pub fn topic_progress<'a, I>(&self, topics: I) -> u8
    where
        I: IntoIterator<Item = &'a Topic>,
    {
        match self.ready() {
            Some(state) => {
                progress::compute_progress(topics, &state.user_progress.topic_statuses, self.weighting())
            }
            None => 0,
        }
    }

    /// Every topic, pre-order.
    pub fn all_topics(&self) -> Vec<&Topic> {
        self.roadmap().map(Roadmap::all_topics).unwrap_or_default()
    }

    /// Every module, pre-order.
    pub fn all_modules(&self) -> Vec<&Module> {
        self.roadmap().map(Roadmap::all_modules).unwrap_or_default()
    }

    /// Topics whose effective status matches; all topics when `status` is `None`.
    pub fn filtered_topics(&self, status: Option<TopicStatus>) -> Vec<&Topic> {
        match status {
            Some(status) => self.search_topics(&TopicFilter::status(status)),
            None => self.all_topics(),
        }
    }

    /// Topics passing `filter`, pre-order.
    pub fn search_topics(&self, filter: &TopicFilter) -> Vec<&Topic> {
        match self.ready() {
            Some(state) => filter.apply(state.roadmap.all_topics(), &state.user_progress.topic_statuses),
            None => Vec::new(),
        }
    }

    /// Modules whose text contains `query`.
    pub fn search_modules(&self, query: &str) -> Vec<&Module> {
        match self.roadmap() {
            Some(roadmap) => progress::search_modules(&roadmap.modules, query),
            None => Vec::new(),
        }
    }

    /// A topic's status after the user's overrides; `None` for unknown topics.
    pub fn effective_status(&self, topic_id: &TopicId) -> Option<TopicStatus> {
        let state = self.ready()?;
        let topic = state.roadmap.find_topic(topic_id)?;
        Some(progress::effective_status(topic, &state.user_progress.topic_statuses))
    }

    /// Counts and hours over the whole roadmap.
    pub fn stats(&self) -> ProgressStats {
        match self.ready() {
            Some(state) => ProgressStats::collect(
                state.roadmap.all_topics(),
                &state.user_progress.topic_statuses,
                self.weighting(),
            ),
            None => ProgressStats::default(),
        }
    }

    /// Per-module overview rows.
    pub fn module_summaries(&self, scope: SummaryScope) -> Vec<ModuleSummary> {
        match self.ready() {
            Some(state) => progress::summarize_modules(
                &state.roadmap.modules,
                &state.user_progress.topic_statuses,
                self.weighting(),
                scope,
            ),
            None => Vec::new(),
        }
    }

    /// The newest topics with their effective statuses.
    pub fn recent_topics(&self, limit: usize) -> Vec<TopicView<'_>> {
        match self.ready() {
            Some(state) => progress::recent_topics(
                state.roadmap.all_topics(),
                &state.user_progress.topic_statuses,
                limit,
            ),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnpath_seed::{Seed, SeedError, SeedGenerator};
    use learnpath_storage::{MemoryStorage, DEFAULT_KEY};

    struct FailingSeeder;

    impl Seeder for FailingSeeder {
        fn generate(&mut self) -> std::result::Result<Seed, SeedError> {
            Err(SeedError::Other("catalog unavailable".to_string()))
        }
    }

    async fn ready_store() -> ProgressStore<MemoryStorage, impl Seeder> {
        let mut store = ProgressStore::new(MemoryStorage::new(), SeedGenerator::seeded(7));
        store.initialize().await.unwrap();
        store
    }

    fn first_topic<S: Storage, G: Seeder>(store: &ProgressStore<S, G>) -> (TopicId, TopicStatus) {
        let topic = store.all_topics()[0];
        (topic.id.clone(), topic.status)
    }

    fn other_status(status: TopicStatus) -> TopicStatus {
        if status.is_completed() {
            TopicStatus::Future
        } else {
            TopicStatus::Completed
        }
    }

    #[tokio::test]
    async fn test_fresh_store_is_uninitialized() {
        let mut store = ProgressStore::new(MemoryStorage::new(), SeedGenerator::seeded(1));
        assert_eq!(store.lifecycle(), Lifecycle::Uninitialized);
        assert_eq!(store.roadmap_progress(), 0);
        assert!(store.all_topics().is_empty());
        assert!(store.roadmap().is_none());
        assert_eq!(store.stats(), ProgressStats::default());

        let id = TopicId::new("t1").unwrap();
        assert!(matches!(
            store.set_topic_status(&id, TopicStatus::Completed).await,
            Err(StoreError::NotReady)
        ));
        assert!(matches!(store.toggle_weighted_progress().await, Err(StoreError::NotReady)));
        assert!(matches!(store.set_theme(Theme::Dark).await, Err(StoreError::NotReady)));
        assert!(matches!(store.reset_progress().await, Err(StoreError::NotReady)));
        assert!(matches!(store.export_snapshot(), Err(StoreError::NotReady)));
        assert_eq!(store.storage().writes(), 0);
    }

    #[tokio::test]
    async fn test_initialize_generates_and_persists() {
        let store = ready_store().await;
        assert_eq!(store.lifecycle(), Lifecycle::Ready);
        assert_eq!(store.all_modules().len(), store.roadmap().unwrap().all_modules().len());
        assert!(!store.all_topics().is_empty());
        assert!(!store.is_mentor());
        assert_eq!(store.storage().writes(), 1);
        assert!(store.storage().raw(DEFAULT_KEY).is_some());
    }

    #[tokio::test]
    async fn test_initialize_failure_leaves_uninitialized() {
        let mut store = ProgressStore::new(MemoryStorage::new(), FailingSeeder);
        assert!(matches!(store.initialize().await, Err(StoreError::Seed(_))));
        assert_eq!(store.lifecycle(), Lifecycle::Uninitialized);
        assert!(store.user().is_none());
        assert_eq!(store.storage().writes(), 0);
    }

    #[tokio::test]
    async fn test_first_initialize_restores_persisted_state() {
        let seed = SeedGenerator::seeded(1).generate().unwrap();
        let mut saved = PersistedState::new(seed.roadmap, seed.user, seed.user_progress);
        let topic_id = saved.roadmap.all_topics()[0].id.clone();
        let status = other_status(saved.roadmap.all_topics()[0].status);
        saved.user_progress.set_status(topic_id.clone(), status, Utc::now());
        saved.user_progress.settings.theme = Theme::Dark;

        let mut storage = MemoryStorage::new();
        storage.save_state(DEFAULT_KEY, &saved).await.unwrap();

        let mut store = ProgressStore::new(storage, SeedGenerator::seeded(2));
        store.initialize().await.unwrap();
        assert_eq!(store.roadmap(), Some(&saved.roadmap));
        assert_eq!(store.user_progress(), Some(&saved.user_progress));
        assert_eq!(store.effective_status(&topic_id), Some(status));

        // A second initialize regenerates instead of reading storage again.
        store.initialize().await.unwrap();
        assert_eq!(store.lifecycle(), Lifecycle::Ready);
        assert_ne!(store.roadmap().unwrap().id, saved.roadmap.id);
        assert_eq!(store.user_progress().unwrap().settings.theme, Theme::System);
    }

    #[tokio::test]
    async fn test_invalid_record_falls_back_to_generation() {
        let storage = MemoryStorage::new().with_raw(DEFAULT_KEY, "{\"roadmap\": null");
        let mut store = ProgressStore::new(storage, SeedGenerator::seeded(3));
        store.initialize().await.unwrap();

        assert_eq!(store.lifecycle(), Lifecycle::Ready);
        // the bad record was replaced by the generated state
        assert!(store.storage().load_state(DEFAULT_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_record_breaking_field_rules_is_regenerated() {
        let seed = SeedGenerator::seeded(1).generate().unwrap();
        let mut saved = PersistedState::new(seed.roadmap, seed.user, seed.user_progress);
        saved.roadmap.version = "not-semver".to_string();
        saved.roadmap.modules[0].topics[0].title.clear();
        saved.user.email = "nope".to_string();

        let mut storage = MemoryStorage::new();
        storage.save_state(DEFAULT_KEY, &saved).await.unwrap();

        let mut store = ProgressStore::new(storage, SeedGenerator::seeded(2));
        store.initialize().await.unwrap();

        let roadmap = store.roadmap().unwrap();
        assert_ne!(roadmap.id, saved.roadmap.id);
        assert_eq!(roadmap.version, "2.0.0");
        assert!(store.user().unwrap().email.contains('@'));
        assert!(store.storage().load_state(DEFAULT_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_regenerate_clears_persisted_record() {
        let seed = SeedGenerator::seeded(1).generate().unwrap();
        let saved = PersistedState::new(seed.roadmap, seed.user, seed.user_progress);
        let mut storage = MemoryStorage::new();
        storage.save_state(DEFAULT_KEY, &saved).await.unwrap();

        let mut store = ProgressStore::new(storage, SeedGenerator::seeded(2)).with_config(StoreConfig {
            auto_persist: false,
            ..Default::default()
        });
        store.initialize().await.unwrap();
        assert_eq!(store.roadmap().map(|r| r.id.clone()), Some(saved.roadmap.id.clone()));

        store.regenerate().await.unwrap();
        assert_eq!(store.lifecycle(), Lifecycle::Ready);
        assert_ne!(store.roadmap().unwrap().id, saved.roadmap.id);
        assert!(store.storage().raw(DEFAULT_KEY).is_none());
    }

    #[tokio::test]
    async fn test_regenerate_persists_fresh_state() {
        let mut store = ready_store().await;
        let old = store.roadmap().unwrap().id.clone();

        store.regenerate().await.unwrap();
        let stored = store.storage().load_state(DEFAULT_KEY).await.unwrap().unwrap();
        assert_ne!(stored.roadmap.id, old);
        assert_eq!(Some(&stored.roadmap), store.roadmap());
    }

    #[tokio::test]
    async fn test_set_topic_status_keeps_overlay_consistent() {
        let mut store = ready_store().await;
        let (id, intrinsic) = first_topic(&store);

        for status in TopicStatus::ALL {
            store.set_topic_status(&id, status).await.unwrap();
            let progress = store.user_progress().unwrap();
            assert!(progress.validate().is_ok());
            assert_eq!(progress.is_completed(&id), status.is_completed());
            assert_eq!(store.effective_status(&id), Some(status));
        }

        // the tree itself is never rewritten
        assert_eq!(store.roadmap().unwrap().find_topic(&id).unwrap().status, intrinsic);
        assert_eq!(store.storage().writes(), 4);
    }

    #[tokio::test]
    async fn test_set_topic_status_is_idempotent() {
        let mut store = ready_store().await;
        let (id, intrinsic) = first_topic(&store);
        let status = other_status(intrinsic);

        store.set_topic_status(&id, status).await.unwrap();
        let once = store.user_progress().cloned().unwrap();
        store.set_topic_status(&id, status).await.unwrap();
        let mut twice = store.user_progress().cloned().unwrap();

        twice.last_updated = once.last_updated;
        assert_eq!(twice, once);
    }

    #[tokio::test]
    async fn test_unknown_topic_is_reported_and_ignored() {
        let mut store = ready_store().await;
        let before = store.user_progress().cloned();
        let id = TopicId::new("no-such-topic").unwrap();

        assert!(matches!(
            store.set_topic_status(&id, TopicStatus::Completed).await,
            Err(StoreError::TopicNotFound(_))
        ));
        assert_eq!(store.user_progress().cloned(), before);
        assert_eq!(store.effective_status(&id), None);
        assert_eq!(store.storage().writes(), 1);
    }

    #[tokio::test]
    async fn test_filtered_topics_use_effective_status() {
        let mut store = ready_store().await;
        let (id, intrinsic) = first_topic(&store);
        let status = other_status(intrinsic);
        store.set_topic_status(&id, status).await.unwrap();

        assert!(store.filtered_topics(Some(status)).iter().any(|t| t.id == id));
        assert!(!store.filtered_topics(Some(intrinsic)).iter().any(|t| t.id == id));
        assert_eq!(store.filtered_topics(None).len(), store.all_topics().len());

        let per_status: usize = TopicStatus::ALL
            .iter()
            .map(|s| store.filtered_topics(Some(*s)).len())
            .sum();
        assert_eq!(per_status, store.all_topics().len());
    }

    #[tokio::test]
    async fn test_completing_everything_reaches_100() {
        let mut store = ready_store().await;
        let ids: Vec<TopicId> = store.all_topics().iter().map(|t| t.id.clone()).collect();
        for id in &ids {
            store.set_topic_status(id, TopicStatus::Completed).await.unwrap();
        }

        assert_eq!(store.roadmap_progress(), 100);
        store.toggle_weighted_progress().await.unwrap();
        assert_eq!(store.roadmap_progress(), 100);

        let module_id = store.roadmap().unwrap().modules[0].id.clone();
        assert_eq!(store.module_progress(&module_id), 100);
        assert_eq!(store.module_progress(&ModuleId::new("missing").unwrap()), 0);

        let stats = store.stats();
        assert_eq!(stats.completed_topics, ids.len());
        assert_eq!(stats.remaining_hours, 0);
    }

    #[tokio::test]
    async fn test_topic_progress_uses_overrides() {
        let mut store = ready_store().await;
        let module = store.roadmap().unwrap().modules[0].clone();
        for topic in module.all_topics() {
            store.set_topic_status(&topic.id, TopicStatus::Future).await.unwrap();
        }
        assert_eq!(store.topic_progress(module.all_topics()), 0);
        assert_eq!(store.topic_progress(Vec::<&Topic>::new()), 0);
    }

    #[tokio::test]
    async fn test_settings_mutations() {
        let mut store = ready_store().await;
        assert!(store.toggle_weighted_progress().await.unwrap());
        assert!(!store.toggle_weighted_progress().await.unwrap());

        store.set_theme(Theme::Light).await.unwrap();
        assert_eq!(store.cycle_theme().await.unwrap(), Theme::Dark);
        assert_eq!(store.user_progress().unwrap().settings.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_reset_keeps_settings_and_user() {
        let mut store = ready_store().await;
        let user_id = store.user().unwrap().id.clone();
        let old_roadmap = store.roadmap().unwrap().id.clone();

        store.toggle_weighted_progress().await.unwrap();
        store.set_theme(Theme::Dark).await.unwrap();
        store.reset_progress().await.unwrap();

        let progress = store.user_progress().unwrap();
        assert!(progress.settings.use_weighted_progress);
        assert_eq!(progress.settings.theme, Theme::Dark);
        assert_eq!(progress.user_id, user_id);
        assert_eq!(store.user().unwrap().id, user_id);
        assert_ne!(store.roadmap().unwrap().id, old_roadmap);
        assert_eq!(progress.roadmap_id, store.roadmap().unwrap().id);
        assert!(progress.validate().is_ok());
    }

    #[tokio::test]
    async fn test_persistence_failure_keeps_mutation() {
        let mut store = ready_store().await;
        store.storage_mut().set_fail_writes(true);

        let (id, intrinsic) = first_topic(&store);
        let status = other_status(intrinsic);
        store.set_topic_status(&id, status).await.unwrap();

        assert_eq!(store.effective_status(&id), Some(status));
        assert_eq!(store.storage().writes(), 1);
    }

    #[tokio::test]
    async fn test_auto_persist_off() {
        let mut store = ProgressStore::new(MemoryStorage::new(), SeedGenerator::seeded(5)).with_config(
            StoreConfig {
                auto_persist: false,
                ..Default::default()
            },
        );
        store.initialize().await.unwrap();
        store.set_theme(Theme::Light).await.unwrap();
        assert_eq!(store.storage().writes(), 0);
    }

    #[tokio::test]
    async fn test_export_round_trip() {
        let mut store = ready_store().await;
        let (id, intrinsic) = first_topic(&store);
        store.set_topic_status(&id, other_status(intrinsic)).await.unwrap();

        let json = store.export_snapshot().unwrap();
        let snapshot = ExportSnapshot::parse(&json).unwrap();
        assert_eq!(Some(&snapshot.roadmap), store.roadmap());
        assert_eq!(Some(&snapshot.user_progress), store.user_progress());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("exportedAt").is_some());
        assert!(value.get("user").is_none());
    }

    #[tokio::test]
    async fn test_views() {
        let store = ready_store().await;
        let recent = store.recent_topics(learnpath_progress::DEFAULT_RECENT_LIMIT);
        assert_eq!(recent.len(), 8);
        assert!(recent.windows(2).all(|w| w[0].topic.created_at >= w[1].topic.created_at));

        let top = store.module_summaries(SummaryScope::TopLevel);
        assert_eq!(top.len(), store.roadmap().unwrap().modules.len());
        assert!(store.module_summaries(SummaryScope::All).len() > top.len());

        assert!(!store.search_modules("css").is_empty());
        assert!(store.search_modules("zzz-nothing").is_empty());
        let all = store.search_topics(&TopicFilter::default());
        assert_eq!(all.len(), store.all_topics().len());
    }
}
