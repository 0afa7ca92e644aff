//! Domain Layer
//!
//! Garment entities, the wizard's draft item and the rules that turn one into
//! an upload. Nothing here talks to the network.

mod category;
mod draft;
mod entity;
mod garment;
mod image;
mod size;

pub use category::Category;
pub use draft::{DraftField, DraftItem, GarmentUpload, ValidationError};
pub use entity::{merge_by_id, Entity};
pub use garment::{Garment, NewGarment};
pub use image::{is_image_mime, resolve_mime_type, ImageFile};
pub use size::Size;
