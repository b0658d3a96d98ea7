//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod logger;
mod models;
mod store;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    log::info!("using todo API at {}", config.api_url);

    mount_to_body(move || view! { <App config=config /> });
}
