//! Item Form Component
//!
//! Name/calories inputs with the Add or Update/Delete/Back controls.

use leptos::prelude::*;

use crate::context::use_tracker;
use crate::view::{use_view_store, ViewStateStoreFields};

fn display(visible: bool) -> &'static str {
    if visible {
        "display: inline-block;"
    } else {
        "display: none;"
    }
}

/// Form for adding and editing items
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_tracker();
    let store = use_view_store();

    let editing = move || store.edit_controls().get();

    view! {
        <div class="card">
            <div class="card-content">
                <span class="card-title">"Add Meal / Food Item"</span>
                <form
                    class="col"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        ctx.dispatch(|c| c.form_submit());
                    }
                >
                    <div class="row">
                        <div class="input-field col s6">
                            <input
                                type="text"
                                id="item-name"
                                placeholder="Add Item"
                                prop:value=move || store.name_input().get()
                                on:input=move |ev| store.name_input().set(event_target_value(&ev))
                            />
                            <label for="item-name">"Meal"</label>
                        </div>
                        <div class="input-field col s6">
                            <input
                                type="number"
                                id="item-calories"
                                placeholder="Add Calories"
                                prop:value=move || store.calories_input().get()
                                on:input=move |ev| store.calories_input().set(event_target_value(&ev))
                            />
                            <label for="item-calories">"Calories"</label>
                        </div>
                    </div>

                    <button type="submit" class="add-btn btn blue darken-3" style=move || display(!editing())>
                        <i class="fa fa-plus"></i>
                        " Add Meal"
                    </button>
                    <button
                        type="button"
                        class="update-btn btn orange"
                        style=move || display(editing())
                        on:click=move |_| ctx.dispatch(|c| c.update_submit())
                    >
                        <i class="fa fa-pencil-square-o"></i>
                        " Update Meal"
                    </button>
                    <button
                        type="button"
                        class="delete-btn btn red"
                        style=move || display(editing())
                        on:click=move |_| ctx.dispatch(|c| c.delete_submit())
                    >
                        <i class="fa fa-remove"></i>
                        " Delete Meal"
                    </button>
                    <button
                        type="button"
                        class="back-btn btn grey pull-right"
                        style=move || display(editing())
                        on:click=move |_| ctx.dispatch(|c| c.back_click())
                    >
                        <i class="fa fa-chevron-circle-left"></i>
                        " Back"
                    </button>
                </form>
            </div>
        </div>
    }
}
