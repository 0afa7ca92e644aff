//! In-memory [`GarmentApi`] for view-model tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::{ApiError, ApiResult, GarmentApi, HelloResponse};
use crate::domain::{Garment, GarmentUpload, NewGarment};

/// Records every request and answers from canned data
#[derive(Default)]
pub struct FakeApi {
    pub garments: RefCell<Vec<Garment>>,
    pub uploads: RefCell<Vec<GarmentUpload>>,
    pub fetch_count: RefCell<usize>,
    pub fail_uploads: bool,
    pub fail_fetch: bool,
    pub offline: bool,
}

impl FakeApi {
    pub fn with_garments(garments: Vec<Garment>) -> Self {
        Self {
            garments: RefCell::new(garments),
            ..Self::default()
        }
    }

    pub fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl GarmentApi for FakeApi {
    async fn test_connection(&self) -> ApiResult<HelloResponse> {
        if self.offline {
            return Err(Self::server_error());
        }
        Ok(HelloResponse {
            message: "Hello from Django!".to_string(),
        })
    }

    async fn get_status(&self) -> ApiResult<serde_json::Value> {
        Ok(serde_json::json!({ "status": "ok" }))
    }

    async fn get_garments(&self) -> ApiResult<Vec<Garment>> {
        *self.fetch_count.borrow_mut() += 1;
        if self.fail_fetch || self.offline {
            return Err(Self::server_error());
        }
        Ok(self.garments.borrow().clone())
    }

    async fn create_garment(&self, garment: &NewGarment) -> ApiResult<Garment> {
        let id = self.garments.borrow().len() as u32 + 1;
        let created = Garment::new(id, garment.name.clone(), "", garment.color.clone(), garment.size.label(), garment.price);
        self.garments.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn upload_garment(&self, upload: &GarmentUpload) -> ApiResult<()> {
        self.uploads.borrow_mut().push(upload.clone());
        if self.fail_uploads {
            return Err(Self::server_error());
        }
        Ok(())
    }
}
