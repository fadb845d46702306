//! Tracker Configuration
//!
//! Storage key, persistence policy and log level, built once in `main`.

use log::LevelFilter;

/// Default `localStorage` key holding the serialized item list
pub const DEFAULT_STORAGE_KEY: &str = "items";

/// Which mutations are written back to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistencePolicy {
    /// Add, update, delete and clear-all all write the full list
    #[default]
    EveryMutation,
    /// Only adds are written; edits, deletes and clears live in memory
    /// until the page is closed
    AddOnly,
}

impl PersistencePolicy {
    /// Whether update/delete/clear should write through
    pub fn persists_edits(&self) -> bool {
        matches!(self, PersistencePolicy::EveryMutation)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub storage_key: String,
    pub persistence: PersistencePolicy,
    pub log_level: LevelFilter,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persistence: PersistencePolicy::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl TrackerConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_persistence(mut self, policy: PersistencePolicy) -> Self {
        self.persistence = policy;
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}
