//! Item Store
//!
//! Canonical in-memory item list, the edit selection and the derived
//! calorie total. Plain data, no reactivity: the coordinator owns one
//! instance and pushes changes to the view itself.

use crate::error::{TrackerError, TrackerResult};
use crate::models::Item;

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    /// Insertion order is display order and drives id assignment
    items: Vec<Item>,
    /// Id of the item being edited, resolved against `items` on every use
    current_item: Option<u32>,
    /// Last value computed by `get_total_calories`
    total_calories: i64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with a previously persisted list
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse `calories`, assign the next id and append
    pub fn add_item(&mut self, name: &str, calories: &str) -> TrackerResult<Item> {
        let calories = parse_calories(calories)?;
        self.check_total_with(None, calories)?;
        let item = Item::new(self.next_id()?, name, calories);
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn get_item_by_id(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Overwrite name and calories of the current item
    ///
    /// `Ok(None)` when nothing is selected or the selection no longer
    /// exists. Nothing is mutated on any non-`Ok(Some)` path.
    pub fn update_item(&mut self, name: &str, calories: &str) -> TrackerResult<Option<Item>> {
        let Some(current_id) = self.current_item else {
            return Ok(None);
        };
        if self.get_item_by_id(current_id).is_none() {
            return Ok(None);
        }
        let calories = parse_calories(calories)?;
        self.check_total_with(Some(current_id), calories)?;
        let Some(item) = self.items.iter_mut().find(|item| item.id == current_id) else {
            return Ok(None);
        };
        item.name = name.to_string();
        item.calories = calories;
        Ok(Some(item.clone()))
    }

    /// Remove the item with `id`; absent ids are ignored
    pub fn delete_item(&mut self, id: u32) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear_all_items(&mut self) {
        self.items.clear();
        self.current_item = None;
    }

    pub fn set_current_item(&mut self, id: Option<u32>) {
        self.current_item = id;
    }

    /// The selected item, if it is still in the list
    pub fn current_item(&self) -> Option<&Item> {
        self.current_item.and_then(|id| self.get_item_by_id(id))
    }

    /// Recompute the total, cache it and return it
    ///
    /// Saturates rather than wrapping; seeded lists are not range checked.
    pub fn get_total_calories(&mut self) -> i64 {
        self.total_calories = self
            .items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.calories));
        self.total_calories
    }

    /// Total as of the last `get_total_calories` call
    pub fn cached_total_calories(&self) -> i64 {
        self.total_calories
    }

    fn next_id(&self) -> TrackerResult<u32> {
        match self.items.last() {
            Some(last) => last
                .id
                .checked_add(1)
                .ok_or_else(|| TrackerError::InvalidInput(format!("no id left after {}", last.id))),
            None => Ok(0),
        }
    }

    /// Reject `calories` if the total would leave the `i64` range, with the
    /// item `replacing` (the one being edited) left out of the sum
    fn check_total_with(&self, replacing: Option<u32>, calories: i64) -> TrackerResult<()> {
        self.items
            .iter()
            .filter(|item| Some(item.id) != replacing)
            .try_fold(calories, |total, item| total.checked_add(item.calories))
            .map(|_| ())
            .ok_or_else(|| TrackerError::InvalidInput(format!("calories {} overflow the total", calories)))
    }
}

/// Decimal number, surrounding whitespace allowed
///
/// A fractional part is dropped (truncated toward zero), so `"12.9"` is 12.
/// Anything else after the digits is rejected.
pub fn parse_calories(raw: &str) -> TrackerResult<i64> {
    let invalid = || TrackerError::InvalidInput(format!("calories '{}' is not a number", raw));

    let trimmed = raw.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let digits = whole.strip_prefix(['-', '+']).unwrap_or(whole);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    // "-0.5" truncates to 0
    whole.parse::<i64>().map_err(|_| invalid())
}
