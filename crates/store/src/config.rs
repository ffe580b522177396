//! Store configuration.

use learnpath_storage::DEFAULT_KEY;

/// Configuration for the progress store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Key the state is persisted under
    pub key: String,
    /// Whether to persist after every successful mutation
    pub auto_persist: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            auto_persist: true,
        }
    }
}
