//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod models;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use storage::{AppStorage, BrowserStorage};

fn main() {
    console_error_panic_hook::set_once();

    let opened = BrowserStorage::open();
    let config = match &opened {
        Ok(browser) => AppConfig::load(browser),
        Err(_) => AppConfig::default(),
    };
    if let Err(e) = console_logger::init_logger(console_logger::parse_level(&config.log_level)) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    let storage = AppStorage::from_opened(opened);

    mount_to_body(move || view! { <App config=config storage=storage /> });
}
