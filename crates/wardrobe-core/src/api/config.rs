//! Client Configuration
//!
//! Injected into [`HttpGarmentApi`](super::HttpGarmentApi) at startup.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backend used during local development
pub const LOCAL_BASE_URL: &str = "http://localhost:8000/api";

/// Upper bound on every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the REST backend lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base address without a trailing slash, e.g. `http://localhost:8000/api`
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: LOCAL_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Config for a deployed backend, keeping the default timeout
    pub fn deployed(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for an endpoint path such as `/garments/`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
