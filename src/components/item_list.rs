//! Item List Component
//!
//! Keyed list of rows. Edit clicks are caught once on the `<ul>` and
//! resolved from the clicked row's element id.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::ItemRow;
use crate::context::use_tracker;
use crate::view::{use_view_store, ViewStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_tracker();
    let store = use_view_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if !target.class_list().contains("edit-item") {
            return;
        }
        ev.prevent_default();
        if let Ok(Some(row)) = target.closest("li") {
            let row_id = row.id();
            ctx.dispatch(move |c| c.edit_row(&row_id));
        }
    };

    let list_style = move || {
        if store.list_visible().get() {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    view! {
        <ul
            id="item-list"
            class="collection"
            style=list_style
            on:click=on_click
        >
            <For
                each=move || store.rows().get()
                // Name and calories in the key so an updated row is redrawn
                key=|item| (item.id, item.name.clone(), item.calories)
                children=move |item| {
                    view! { <ItemRow item=item /> }
                }
            />
        </ul>
    }
}
