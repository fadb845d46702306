//! View Layer
//!
//! The rendering contract the coordinator talks to, pure markup helpers,
//! and the reactive-store implementation the components draw from.

pub mod markup;
mod store;

pub use store::{use_view_store, SignalView, ViewState, ViewStateStoreFields, ViewStore};

use crate::models::{Item, ItemInput};

/// Everything the coordinator may do to the visible page
///
/// Implementations only see data passed in; they never reach into the
/// item store.
pub trait ItemView {
    /// Replace the list with one row per item and show it
    fn render(&mut self, items: &[Item]);

    /// Raw name/calories field values
    fn read_form(&self) -> ItemInput;

    /// Add one row at the end, showing the list if hidden
    fn append_row(&mut self, item: &Item);

    /// Redraw the row for `item.id`
    fn update_row(&mut self, item: &Item);

    fn remove_row(&mut self, id: u32);

    fn clear_form(&mut self);

    /// Copy the item into the form and switch to edit controls
    fn populate_form(&mut self, item: &Item);

    fn set_total_calories(&mut self, total: i64);

    /// Show Update/Delete/Back, hide Add
    fn enter_edit_mode(&mut self);

    /// Show Add, hide Update/Delete/Back
    fn exit_edit_mode(&mut self);

    fn hide_list(&mut self);

    fn clear_rows(&mut self);
}
