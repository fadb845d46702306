//! UI Components
//!
//! Leptos components that draw the view store and forward DOM events to
//! the coordinator.

mod item_form;
mod item_list;
mod item_row;
mod nav_bar;
mod total_calories;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use nav_bar::NavBar;
pub use total_calories::TotalCalories;
