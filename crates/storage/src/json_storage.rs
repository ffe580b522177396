//! JSON file storage implementation.
//!
//! Stores each record as a pretty-printed JSON file in a data directory and
//! keeps a small per-record meta marker (version + updated_at) next to it.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::state::PersistedState;
use crate::trait_::check_key;
use crate::{Result, Storage};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the data and meta
    /// directories if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        fs::create_dir_all(root.join("meta")).await?;
        Ok(Self { root })
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn state_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.root.join("meta").join(format!("{}.meta.json", key))
    }

    /// How many times the record under `key` has been saved.
    pub async fn version(&self, key: &str) -> Result<u64> {
        check_key(key)?;
        Ok(read_version(&self.meta_path(key)).await)
    }

    /// Read and increment the record version, return the new version.
    async fn bump_version(&self, key: &str) -> Result<u64> {
        let path = self.meta_path(key);
        let version = read_version(&path).await + 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(&path, serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_state(&self, key: &str) -> Result<Option<PersistedState>> {
        check_key(key)?;
        match fs::read_to_string(self.state_path(key)).await {
            Ok(json) => Ok(Some(PersistedState::from_json(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_state(&mut self, key: &str, state: &PersistedState) -> Result<()> {
        check_key(key)?;
        let json = serde_json::to_string_pretty(state)?;

        // Write to a sibling file first so a crash never leaves half a record.
        let path = self.state_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;

        let version = self.bump_version(key).await?;
        debug!("Saved {} (version {})", key, version);
        Ok(())
    }

    async fn delete_state(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        for path in [self.state_path(key), self.meta_path(key)] {
            fs::remove_file(path).await.or_else(|e| {
                if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
            })?;
        }
        Ok(())
    }
}

async fn read_version(path: &Path) -> u64 {
    match fs::read_to_string(path).await {
        Ok(s) => serde_json::from_str::<serde_json::Value>(&s)
            .ok()
            .and_then(|json| json.get("version").and_then(|v| v.as_u64()))
            .unwrap_or(0),
        // missing meta means never saved
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::sample_state;
    use crate::StorageError;
    use learnpath_core::{TopicId, TopicStatus};

    #[tokio::test]
    async fn test_missing_record_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        assert!(storage.load_state("roadmap-storage").await.unwrap().is_none());
        assert_eq!(storage.version("roadmap-storage").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let mut state = sample_state();
        state
            .user_progress
            .set_status(TopicId::new("t2").unwrap(), TopicStatus::Completed, chrono::Utc::now());

        storage.save_state("roadmap-storage", &state).await.unwrap();
        storage.save_state("roadmap-storage", &state).await.unwrap();

        let loaded = storage.load_state("roadmap-storage").await.unwrap().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.user_progress.completed_topics.len(), 2);
        assert_eq!(storage.version("roadmap-storage").await.unwrap(), 2);
        assert!(dir.path().join("roadmap-storage.json").exists());
        assert!(!dir.path().join("roadmap-storage.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_record_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("roadmap-storage.json"), "not json").unwrap();

        let err = storage.load_state("roadmap-storage").await.unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        storage.save_state("k", &sample_state()).await.unwrap();
        storage.delete_state("k").await.unwrap();
        storage.delete_state("k").await.unwrap();
        assert!(storage.load_state("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        assert!(matches!(
            storage.load_state("../escape").await,
            Err(StorageError::Other(_))
        ));
    }
}
