//! Item Row Component

use leptos::prelude::*;

use crate::models::Item;
use crate::view::markup::{calories_label, row_element_id};

/// A single `<li>` with name, calories and the edit icon
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    view! {
        <li class="collection-item" id=row_element_id(item.id)>
            <strong>{item.name}</strong>
            " "
            <em>{calories_label(item.calories)}</em>
            <a href="#" class="secondary-content">
                <i class="edit-item fa fa-pencil"></i>
            </a>
        </li>
    }
}
