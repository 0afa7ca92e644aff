//! UI Components
//!
//! Leptos components. Each one owns a wardrobe-core view model and redraws
//! from it.

mod add_item_modal;
mod category_sidebar;
mod garment_list;
mod image_upload;
mod inventory;
mod notice_toast;
mod size_selector;

pub use add_item_modal::AddItemModal;
pub use category_sidebar::CategorySidebar;
pub use garment_list::GarmentList;
pub use image_upload::ImageUpload;
pub use inventory::Inventory;
pub use notice_toast::{NoticeHandle, NoticeToast};
pub use size_selector::SizeSelector;
