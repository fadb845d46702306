//! In-memory backend

use std::cell::RefCell;
use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::TrackerResult;

/// Key-value slots held in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("items").unwrap(), None);

        store.set("items", "[]").unwrap();
        assert_eq!(store.get("items").unwrap().as_deref(), Some("[]"));

        store.remove("items").unwrap();
        assert_eq!(store.get("items").unwrap(), None);
        // Removing twice is fine
        store.remove("items").unwrap();
    }
}
