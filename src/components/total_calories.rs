//! Total Calories Component

use leptos::prelude::*;

use crate::view::{use_view_store, ViewStateStoreFields};

#[component]
pub fn TotalCalories() -> impl IntoView {
    let store = use_view_store();

    view! {
        <h3 class="center-align">
            "Total Calories: "
            <span class="total-calories">{move || store.total_calories().get()}</span>
        </h3>
    }
}
