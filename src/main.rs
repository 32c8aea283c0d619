//! Catalog Browser Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod derive;
mod error;
mod format;
mod models;
mod state;
mod storage;
mod store;
mod view;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Install first so config warnings are not lost, then narrow to the configured level
    if let Err(e) = console_logger::init(log::LevelFilter::Trace) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    log::set_max_level(log::LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_level());

    mount_to_body(move || view! { <App config=config /> });
}
