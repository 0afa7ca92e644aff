//! Wardrobe Frontend Entry Point

mod app;
mod components;
mod context;

use app::App;
use context::AppConfig;
use leptos::prelude::*;
use wardrobe_core::HttpGarmentApi;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("[Main] Logger already set: {}", e).into());
    }
    log::info!("[Main] Backend at {}", config.api.base_url);

    match HttpGarmentApi::new(config.api.clone()) {
        Ok(api) => {
            let options = config.inventory;
            mount_to_body(move || view! { <App api=api options=options /> });
        }
        Err(e) => {
            log::error!("[Main] Cannot create API client: {}", e);
            let message = e.to_string();
            mount_to_body(move || view! { <div class="error-box">{message}</div> });
        }
    }
}
