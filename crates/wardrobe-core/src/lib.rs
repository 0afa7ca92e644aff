//! Wardrobe Core
//!
//! Layered architecture:
//! - domain: garment entities, draft items and the rules around them
//! - api: access to the wardrobe REST backend
//! - views: UI-agnostic view models driven by the front end

pub mod api;
pub mod domain;
pub mod views;

pub use api::{ApiConfig, ApiError, ApiResult, GarmentApi, HttpGarmentApi};
pub use domain::{Category, DraftField, DraftItem, Garment, GarmentUpload, ImageFile, NewGarment, Size};
