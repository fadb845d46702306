//! Interaction Coordinator
//!
//! Sequences item store, view and persistence for every user action and
//! owns the Add/Edit mode switch. Components forward DOM events here;
//! nothing in this module touches the DOM directly.


use crate::config::{PersistencePolicy, TrackerConfig};
use crate::error::TrackerResult;
use crate::item_store::ItemStore;
use crate::models::Item;
use crate::storage::{ItemPersistence, KeyValueStore};
use crate::view::markup::parse_row_id;
use crate::view::ItemView;

/// Which set of form controls is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Add button visible, form creates new items
    #[default]
    Add,
    /// Update/Delete/Back visible, form edits the current item
    Edit,
}

pub struct Coordinator<K: KeyValueStore, V: ItemView> {
    store: ItemStore,
    persistence: ItemPersistence<K>,
    view: V,
    mode: Mode,
    policy: PersistencePolicy,
}

impl<K: KeyValueStore, V: ItemView> Coordinator<K, V> {
    /// Seed the item store from `backend`; call [`Coordinator::init`] to paint
    pub fn new(config: &TrackerConfig, backend: K, view: V) -> Self {
        let persistence = ItemPersistence::new(backend, config.storage_key.clone());
        let items = persistence.load();
        log::info!("[TRACKER] loaded {} items from '{}'", items.len(), persistence.key());
        Self {
            store: ItemStore::with_items(items),
            persistence,
            view,
            mode: Mode::Add,
            policy: config.persistence,
        }
    }

    /// Initial paint: list (or hidden list), total, Add controls
    pub fn init(&mut self) {
        self.leave_edit_mode();
        if self.store.is_empty() {
            self.view.hide_list();
        } else {
            self.view.render(self.store.items());
        }
        self.refresh_total();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn persistence(&self) -> &ItemPersistence<K> {
        &self.persistence
    }

    /// Item being edited, if any
    pub fn current_item(&self) -> Option<&Item> {
        self.store.current_item()
    }

    /// Enter on either field: add or update depending on mode
    pub fn form_submit(&mut self) {
        match self.mode {
            Mode::Add => self.add_submit(),
            Mode::Edit => self.update_submit(),
        }
    }

    pub fn add_submit(&mut self) {
        if self.mode != Mode::Add {
            return;
        }
        let input = self.view.read_form();
        if input.is_blank() {
            return;
        }

        let item = match self.store.add_item(&input.name, &input.calories) {
            Ok(item) => item,
            Err(e) => {
                log::debug!("[TRACKER] add ignored: {}", e);
                return;
            }
        };
        log::debug!("[TRACKER] added item {} ({})", item.id, item.name);

        self.view.append_row(&item);
        self.refresh_total();
        // A full write also repairs storage after an earlier failed save
        let stored = if self.policy.persists_edits() {
            self.persistence.save_items(self.store.items())
        } else {
            self.persistence.store_item(&item)
        };
        self.report(stored);
        self.view.clear_form();
    }

    /// Click on a row's edit icon, identified by the row's element id
    pub fn edit_row(&mut self, element_id: &str) {
        match parse_row_id(element_id) {
            Some(id) => self.edit_click(id),
            None => log::debug!("[TRACKER] click on unknown row '{}'", element_id),
        }
    }

    /// Select item `id` for editing and switch to Edit mode
    pub fn edit_click(&mut self, id: u32) {
        let Some(item) = self.store.get_item_by_id(id).cloned() else {
            log::debug!("[TRACKER] edit of missing item {}", id);
            return;
        };
        self.store.set_current_item(Some(item.id));
        self.view.populate_form(&item);
        self.mode = Mode::Edit;
    }

    pub fn update_submit(&mut self) {
        if self.mode != Mode::Edit {
            return;
        }
        let input = self.view.read_form();
        if input.is_blank() {
            return;
        }

        match self.store.update_item(&input.name, &input.calories) {
            Ok(Some(item)) => {
                log::debug!("[TRACKER] updated item {}", item.id);
                self.view.update_row(&item);
                self.refresh_total();
                self.persist_edit();
                self.leave_edit_mode();
            }
            Ok(None) => {
                log::debug!("[TRACKER] update target is gone");
                self.leave_edit_mode();
            }
            Err(e) => log::debug!("[TRACKER] update ignored: {}", e),
        }
    }

    pub fn delete_submit(&mut self) {
        if self.mode != Mode::Edit {
            return;
        }
        let Some(id) = self.store.current_item().map(|item| item.id) else {
            self.leave_edit_mode();
            return;
        };

        self.store.delete_item(id);
        log::debug!("[TRACKER] deleted item {}", id);
        self.view.remove_row(id);
        self.refresh_total();
        if self.store.is_empty() {
            self.view.hide_list();
        }
        self.persist_edit();
        self.leave_edit_mode();
    }

    pub fn back_click(&mut self) {
        self.leave_edit_mode();
    }

    pub fn clear_all_click(&mut self) {
        self.store.clear_all_items();
        self.refresh_total();
        self.view.clear_rows();
        self.view.hide_list();
        if self.mode == Mode::Edit {
            self.leave_edit_mode();
        }
        if self.policy.persists_edits() {
            let cleared = self.persistence.clear();
            self.report(cleared);
        }
        log::debug!("[TRACKER] cleared all items");
    }

    fn leave_edit_mode(&mut self) {
        self.store.set_current_item(None);
        self.view.clear_form();
        self.view.exit_edit_mode();
        self.mode = Mode::Add;
    }

    fn refresh_total(&mut self) {
        let total = self.store.get_total_calories();
        self.view.set_total_calories(total);
    }

    /// Write the full list after an update or delete, if the policy says so
    fn persist_edit(&self) {
        if self.policy.persists_edits() {
            let saved = self.persistence.save_items(self.store.items());
            self.report(saved);
        }
    }

    fn report(&self, result: TrackerResult<()>) {
        if let Err(e) = result {
            log::warn!("[TRACKER] could not persist items: {}", e);
        }
    }
}
