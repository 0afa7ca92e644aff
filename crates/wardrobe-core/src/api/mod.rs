//! API Layer
//!
//! Abstract access to the wardrobe REST backend, plus the reqwest
//! implementation used by the front end.

mod config;
mod error;
mod http;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Garment, GarmentUpload, NewGarment};

pub use config::{ApiConfig, DEFAULT_TIMEOUT_SECS, LOCAL_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use http::HttpGarmentApi;

// ========================
// Endpoint Paths
// ========================

pub const HELLO_PATH: &str = "/hello/";
pub const STATUS_PATH: &str = "/status/";
pub const GARMENTS_PATH: &str = "/garments/";
/// Multipart create used by the add-item wizard
pub const GARMENT_UPLOAD_PATH: &str = "/garments-api/";

/// Body of the connectivity probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Operations the views need from the backend.
///
/// Every call is one-shot: no retry, no caching. Failures are logged by the
/// implementation and returned so the caller decides what the user sees.
/// Not `Send`: the front end runs on a single thread.
#[async_trait(?Send)]
pub trait GarmentApi {
    /// `GET /hello/`
    async fn test_connection(&self) -> ApiResult<HelloResponse>;

    /// `GET /status/`
    async fn get_status(&self) -> ApiResult<serde_json::Value>;

    /// `GET /garments/`
    async fn get_garments(&self) -> ApiResult<Vec<Garment>>;

    /// `POST /garments/` with a JSON body
    async fn create_garment(&self, garment: &NewGarment) -> ApiResult<Garment>;

    /// `POST /garments-api/` as multipart form data
    async fn upload_garment(&self, upload: &GarmentUpload) -> ApiResult<()>;
}
