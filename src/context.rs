//! Application Context
//!
//! Build-time configuration and the shared handles provided via Leptos
//! Context API.

use leptos::prelude::*;
use log::Level;
use wardrobe_core::views::InventoryOptions;
use wardrobe_core::{ApiConfig, HttpGarmentApi};

use crate::components::NoticeHandle;

/// Settings baked in at compile time
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub inventory: InventoryOptions,
    pub log_level: Level,
}

impl AppConfig {
    /// Read `WARDROBE_API_URL`, `WARDROBE_SAMPLE_ITEMS` and `WARDROBE_LOG_LEVEL`.
    /// Anything unset keeps the local development default.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("WARDROBE_API_URL"),
            option_env!("WARDROBE_SAMPLE_ITEMS"),
            option_env!("WARDROBE_LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, sample_items: Option<&str>, log_level: Option<&str>) -> Self {
        let api = match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => ApiConfig::deployed(url),
            None => ApiConfig::default(),
        };
        let include_sample_items = matches!(
            sample_items.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("1" | "true" | "yes")
        );
        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(Level::Info);

        Self {
            api,
            inventory: InventoryOptions { include_sample_items },
            log_level,
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST client; cloned out for each request
    api: StoredValue<HttpGarmentApi, LocalStorage>,
    pub inventory_options: InventoryOptions,
    pub notices: NoticeHandle,
}

impl AppContext {
    pub fn new(api: HttpGarmentApi, inventory_options: InventoryOptions, notices: NoticeHandle) -> Self {
        Self {
            api: StoredValue::new_local(api),
            inventory_options,
            notices,
        }
    }

    /// Client for one request or task
    pub fn api(&self) -> HttpGarmentApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
