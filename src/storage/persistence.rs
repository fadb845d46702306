//! Item Persistence
//!
//! Keeps the full item list as one JSON array under a fixed key.
//! Reads fail soft: a missing or undecodable value is an empty list.

use super::KeyValueStore;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Item;

/// Serializes the item list into a single backend slot
pub struct ItemPersistence<K: KeyValueStore> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> ItemPersistence<K> {
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Append one item: read the stored list, push, write the whole list back
    pub fn store_item(&self, item: &Item) -> TrackerResult<()> {
        let mut items = self.load();
        items.push(item.clone());
        self.save_items(&items)
    }

    /// Overwrite the stored list with `items`
    pub fn save_items(&self, items: &[Item]) -> TrackerResult<()> {
        let json = serde_json::to_string(items)
            .map_err(|e| TrackerError::Storage(format!("serialize items: {}", e)))?;
        self.backend.set(&self.key, &json)?;
        log::debug!("persisted {} items under '{}'", items.len(), self.key);
        Ok(())
    }

    /// Stored list, or empty when absent, unreadable or malformed
    pub fn load(&self) -> Vec<Item> {
        match self.try_load() {
            Ok(items) => items,
            Err(e) => {
                log::warn!("ignoring stored items under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Drop the stored list entirely
    pub fn clear(&self) -> TrackerResult<()> {
        self.backend.remove(&self.key)
    }

    fn try_load(&self) -> TrackerResult<Vec<Item>> {
        match self.backend.get(&self.key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn persistence() -> ItemPersistence<MemoryStore> {
        ItemPersistence::new(MemoryStore::new(), "items")
    }

    #[test]
    fn test_load_absent_is_empty() {
        assert!(persistence().load().is_empty());
    }

    #[test]
    fn test_first_store_writes_a_list() {
        let p = persistence();
        p.store_item(&Item::new(0, "Eggs", 300)).unwrap();

        let raw = p.backend().get("items").unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":0,"name":"Eggs","calories":300}]"#);
        assert_eq!(p.load(), vec![Item::new(0, "Eggs", 300)]);
    }

    #[test]
    fn test_store_item_appends_in_order() {
        let p = persistence();
        p.store_item(&Item::new(0, "Rice", 200)).unwrap();
        p.store_item(&Item::new(1, "Beans", 150)).unwrap();

        let loaded = p.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Rice");
        assert_eq!(loaded[1].name, "Beans");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let p = persistence();
        let items = vec![
            Item::new(4, "Toast", 90),
            Item::new(2, "Jam", 50),
            Item::new(7, "Tea", 0),
        ];
        p.save_items(&items).unwrap();
        assert_eq!(p.load(), items);
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let p = ItemPersistence::new(MemoryStore::with_value("items", "{oops"), "items");
        assert!(p.load().is_empty());
    }

    #[test]
    fn test_single_object_is_not_a_list() {
        // A lone item (not wrapped in an array) is the wrong shape
        let p = ItemPersistence::new(
            MemoryStore::with_value("items", r#"{"id":0,"name":"Eggs","calories":300}"#),
            "items",
        );
        assert!(p.load().is_empty());
    }

    #[test]
    fn test_store_item_over_malformed_state_starts_fresh() {
        let p = ItemPersistence::new(MemoryStore::with_value("items", "null?"), "items");
        p.store_item(&Item::new(0, "Soup", 120)).unwrap();
        assert_eq!(p.load(), vec![Item::new(0, "Soup", 120)]);
    }

    #[test]
    fn test_clear_removes_slot() {
        let p = persistence();
        p.store_item(&Item::new(0, "Eggs", 300)).unwrap();
        p.clear().unwrap();
        assert_eq!(p.backend().get("items").unwrap(), None);
        assert!(p.load().is_empty());
    }

    #[test]
    fn test_other_keys_untouched() {
        let store = MemoryStore::with_value("settings", "dark");
        let p = ItemPersistence::new(store, "items");
        p.save_items(&[Item::new(0, "Eggs", 300)]).unwrap();
        assert_eq!(p.backend().get("settings").unwrap().as_deref(), Some("dark"));
    }
}
