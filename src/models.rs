//! Frontend Models
//!
//! Data structures shared by the store, persistence and view.

use serde::{Deserialize, Serialize};

/// A named calorie entry
///
/// Serialized as `{"id", "name", "calories"}`, the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub calories: i64,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, calories: i64) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }
}

/// Raw form values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub calories: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// True when either field is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.calories.trim().is_empty()
    }
}
