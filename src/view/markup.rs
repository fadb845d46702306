//! Markup Helpers
//!
//! Pure string helpers shared by the row component and the list's click
//! delegation.

const ROW_ID_PREFIX: &str = "item-";

/// DOM id of the row for `id`, e.g. `item-3`
pub fn row_element_id(id: u32) -> String {
    format!("{}{}", ROW_ID_PREFIX, id)
}

/// Inverse of [`row_element_id`]
pub fn parse_row_id(element_id: &str) -> Option<u32> {
    element_id.strip_prefix(ROW_ID_PREFIX)?.parse().ok()
}

/// Row caption for a calorie count
pub fn calories_label(calories: i64) -> String {
    format!("{} Calories", calories)
}
