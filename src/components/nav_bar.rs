//! Nav Bar Component
//!
//! Title bar with the Clear All control.

use leptos::prelude::*;

use crate::context::use_tracker;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_tracker();

    view! {
        <nav>
            <div class="nav-wrapper blue">
                <div class="container">
                    <a href="#" class="brand-logo center">"Tracalorie"</a>
                    <ul class="right">
                        <li>
                            <a
                                href="#"
                                class="clear-btn btn blue lighten-3"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    ctx.dispatch(|c| c.clear_all_click());
                                }
                            >
                                "Clear All"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}
