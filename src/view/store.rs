//! View State Store
//!
//! Uses Leptos reactive_stores so each component only re-renders for the
//! field it reads.

use leptos::prelude::*;
use reactive_stores::Store;

use super::ItemView;
use crate::models::{Item, ItemInput};

/// Everything visible on the page
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows in display order
    pub rows: Vec<Item>,
    /// Name field value
    pub name_input: String,
    /// Calories field value
    pub calories_input: String,
    /// Value shown in the total display
    pub total_calories: i64,
    /// Whether the list container is displayed
    pub list_visible: bool,
    /// Update/Delete/Back shown instead of Add
    pub edit_controls: bool,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// `ItemView` that writes into the view store
pub struct SignalView {
    store: ViewStore,
}

impl SignalView {
    pub fn new(store: ViewStore) -> Self {
        Self { store }
    }
}

impl ItemView for SignalView {
    fn render(&mut self, items: &[Item]) {
        self.store.rows().set(items.to_vec());
        self.store.list_visible().set(true);
    }

    fn read_form(&self) -> ItemInput {
        ItemInput {
            name: self.store.name_input().get_untracked(),
            calories: self.store.calories_input().get_untracked(),
        }
    }

    fn append_row(&mut self, item: &Item) {
        self.store.list_visible().set(true);
        self.store.rows().write().push(item.clone());
    }

    fn update_row(&mut self, item: &Item) {
        self.store.rows().write().iter_mut()
            .find(|row| row.id == item.id)
            .map(|row| *row = item.clone());
    }

    fn remove_row(&mut self, id: u32) {
        self.store.rows().write().retain(|row| row.id != id);
    }

    fn clear_form(&mut self) {
        self.store.name_input().set(String::new());
        self.store.calories_input().set(String::new());
    }

    fn populate_form(&mut self, item: &Item) {
        self.store.name_input().set(item.name.clone());
        self.store.calories_input().set(item.calories.to_string());
        self.enter_edit_mode();
    }

    fn set_total_calories(&mut self, total: i64) {
        self.store.total_calories().set(total);
    }

    fn enter_edit_mode(&mut self) {
        self.store.edit_controls().set(true);
    }

    fn exit_edit_mode(&mut self) {
        self.store.edit_controls().set(false);
    }

    fn hide_list(&mut self) {
        self.store.list_visible().set(false);
    }

    fn clear_rows(&mut self) {
        self.store.rows().write().clear();
    }
}
