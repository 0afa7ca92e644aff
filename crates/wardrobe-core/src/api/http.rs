//! HTTP Client
//!
//! reqwest-backed [`GarmentApi`]. Works natively and on wasm32 (fetch).

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::{
    ApiConfig, ApiError, ApiResult, GarmentApi, HelloResponse, GARMENTS_PATH, GARMENT_UPLOAD_PATH,
    HELLO_PATH, STATUS_PATH,
};
use crate::domain::{Garment, GarmentUpload, NewGarment};

/// Client for the wardrobe backend at a single configured base address
#[derive(Debug, Clone)]
pub struct HttpGarmentApi {
    client: Client,
    config: ApiConfig,
}

impl HttpGarmentApi {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .timeout(self.config.timeout())
            .send()
            .await
            .inspect_err(|e| error!("Error {}: {}", operation, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        error!("Error {}: server returned {}: {}", operation, status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, operation: &str, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(operation, request).await?;
        let text = response
            .text()
            .await
            .inspect_err(|e| error!("Error {}: {}", operation, e))?;
        serde_json::from_str(&text).map_err(|e| {
            error!("Error {}: undecodable body: {}", operation, e);
            ApiError::from(e)
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        self.client.get(url)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        self.client.post(url)
    }
}

/// Build the multipart body: text fields first, then the optional image part
fn multipart_form(upload: &GarmentUpload) -> ApiResult<Form> {
    let mut form = Form::new();
    for (key, value) in upload.text_fields() {
        form = form.text(key, value);
    }
    if let Some(image) = &upload.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.name.clone())
            .mime_str(&image.mime_type)?;
        form = form.part("image", part);
    }
    Ok(form)
}

#[async_trait(?Send)]
impl GarmentApi for HttpGarmentApi {
    async fn test_connection(&self) -> ApiResult<HelloResponse> {
        self.fetch_json("testing connection", self.get(HELLO_PATH)).await
    }

    async fn get_status(&self) -> ApiResult<serde_json::Value> {
        self.fetch_json("getting status", self.get(STATUS_PATH)).await
    }

    async fn get_garments(&self) -> ApiResult<Vec<Garment>> {
        let garments: Vec<Garment> = self
            .fetch_json("fetching garments", self.get(GARMENTS_PATH))
            .await?;
        info!("Fetched {} garments", garments.len());
        Ok(garments)
    }

    async fn create_garment(&self, garment: &NewGarment) -> ApiResult<Garment> {
        self.fetch_json("creating garment", self.post(GARMENTS_PATH).json(garment))
            .await
    }

    async fn upload_garment(&self, upload: &GarmentUpload) -> ApiResult<()> {
        let form = multipart_form(upload).inspect_err(|e| error!("Error submitting form: {}", e))?;
        self.send("submitting form", self.post(GARMENT_UPLOAD_PATH).multipart(form))
            .await?;
        info!("Uploaded garment {:?}", upload.name);
        Ok(())
    }
}
