//! Storage Layer
//!
//! A string key-value backend trait plus the adapter that keeps the
//! whole item list serialized under one key.

mod browser;
mod memory;
mod persistence;

pub use browser::BrowserStorage;
pub use memory::MemoryStore;
pub use persistence::ItemPersistence;

use crate::error::TrackerResult;

/// Durable string key-value slot store
///
/// Mirrors the subset of the Web Storage API the tracker needs.
/// All calls are synchronous.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> TrackerResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> TrackerResult<()>;
}
