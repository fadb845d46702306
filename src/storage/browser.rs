//! Browser localStorage backend

use super::{KeyValueStore, MemoryStore};
use crate::error::{TrackerError, TrackerResult};

/// `window.localStorage`, if the browser grants it
///
/// Private browsing modes and sandboxed iframes may deny access; the
/// backend then keeps values in memory for the life of the page.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

impl BrowserStorage {
    pub fn new() -> Self {
        match web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
            Some(storage) => Self {
                storage: Some(storage),
                fallback: MemoryStore::new(),
            },
            None => Self::unavailable(),
        }
    }

    /// Backend for when localStorage can't be reached
    pub fn unavailable() -> Self {
        log::warn!("localStorage unavailable, items will not survive a reload");
        Self {
            storage: None,
            fallback: MemoryStore::new(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| TrackerError::Storage(format!("getItem({}) failed: {:?}", key, e))),
            None => self.fallback.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| TrackerError::Storage(format!("setItem({}) failed: {:?}", key, e))),
            None => self.fallback.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        match &self.storage {
            Some(storage) => storage
                .remove_item(key)
                .map_err(|e| TrackerError::Storage(format!("removeItem({}) failed: {:?}", key, e))),
            None => self.fallback.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_storage_keeps_values_in_memory() {
        let storage = BrowserStorage::unavailable();
        assert!(!storage.is_persistent());
        assert_eq!(storage.get("items").unwrap(), None);

        storage.set("items", "[]").unwrap();
        assert_eq!(storage.get("items").unwrap().as_deref(), Some("[]"));

        storage.remove("items").unwrap();
        assert_eq!(storage.get("items").unwrap(), None);
    }
}
