//! In-memory storage backend.
//!
//! Records are kept as serialized JSON text so loads go through the same
//! parse and validation path as the file backend.

use std::collections::HashMap;

use crate::state::PersistedState;
use crate::trait_::check_key;
use crate::{Result, Storage, StorageError};

/// Storage that lives only as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a record with raw text, bypassing validation.
    pub fn with_raw(mut self, key: impl Into<String>, json: impl Into<String>) -> Self {
        self.records.insert(key.into(), json.into());
        self
    }

    /// Make every subsequent save fail.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Raw text stored under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn load_state(&self, key: &str) -> Result<Option<PersistedState>> {
        check_key(key)?;
        self.records
            .get(key)
            .map(|json| PersistedState::from_json(json))
            .transpose()
    }

    async fn save_state(&mut self, key: &str, state: &PersistedState) -> Result<()> {
        check_key(key)?;
        if self.fail_writes {
            return Err(StorageError::Other("storage is read-only".to_string()));
        }
        self.records.insert(key.to_string(), serde_json::to_string(state)?);
        self.writes += 1;
        Ok(())
    }

    async fn delete_state(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        self.records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::sample_state;

    #[tokio::test]
    async fn test_round_trip() {
        let mut storage = MemoryStorage::new();
        let state = sample_state();

        storage.save_state("k", &state).await.unwrap();
        assert_eq!(storage.load_state("k").await.unwrap(), Some(state));
        assert_eq!(storage.writes(), 1);
    }

    #[tokio::test]
    async fn test_failing_writes() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);

        assert!(storage.save_state("k", &sample_state()).await.is_err());
        assert_eq!(storage.writes(), 0);
        assert!(storage.raw("k").is_none());
    }

    #[tokio::test]
    async fn test_raw_garbage_fails_to_load() {
        let storage = MemoryStorage::new().with_raw("k", "[]");
        assert!(storage.load_state("k").await.is_err());
    }
}
