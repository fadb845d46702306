//! Application Context
//!
//! The coordinator handle provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::coordinator::Coordinator;
use crate::storage::BrowserStorage;
use crate::view::SignalView;

/// Coordinator wired to the browser
pub type TrackerCoordinator = Coordinator<BrowserStorage, SignalView>;

/// App-wide handle to the coordinator
///
/// `web_sys::Storage` is not `Send`, so the coordinator lives in a
/// thread-local arena slot; the handle itself is `Copy`.
#[derive(Clone, Copy)]
pub struct TrackerContext {
    coordinator: StoredValue<TrackerCoordinator, LocalStorage>,
}

impl TrackerContext {
    pub fn new(coordinator: TrackerCoordinator) -> Self {
        Self {
            coordinator: StoredValue::new_local(coordinator),
        }
    }

    /// Run one event handler against the coordinator
    pub fn dispatch(&self, handler: impl FnOnce(&mut TrackerCoordinator)) {
        self.coordinator.update_value(handler);
    }
}

/// Get the tracker context
pub fn use_tracker() -> TrackerContext {
    use_context::<TrackerContext>().expect("TrackerContext should be provided")
}
