#![allow(warnings)]
//! Calorie Tracker Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod coordinator;
mod error;
mod item_store;
mod models;
mod storage;
mod view;

use app::App;
use config::TrackerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = TrackerConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger already set: {}", e).into());
    }
    log::info!("[APP] starting, storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
