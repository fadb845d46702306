//! Calorie Tracker App
//!
//! Builds the coordinator once, paints the initial state and lays out
//! the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemForm, ItemList, NavBar, TotalCalories};
use crate::config::TrackerConfig;
use crate::context::TrackerContext;
use crate::coordinator::Coordinator;
use crate::storage::BrowserStorage;
use crate::view::{SignalView, ViewState};

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let view_store = Store::new(ViewState::default());

    let mut coordinator = Coordinator::new(&config, BrowserStorage::new(), SignalView::new(view_store));
    coordinator.init();

    // Provide context to all children
    provide_context(view_store);
    provide_context(TrackerContext::new(coordinator));

    view! {
        <NavBar />
        <div class="container">
            <ItemForm />
            <TotalCalories />
            <ItemList />
        </div>
    }
}
