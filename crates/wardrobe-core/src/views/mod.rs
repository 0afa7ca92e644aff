//! View Models
//!
//! One owned view model per component instance. State changes go through
//! explicit methods and are published to subscribers; the rendering layer
//! decides how to redraw and how to show [`Notice`]s.

mod fixtures;
mod garment_list;
mod image_upload;
mod inventory;
mod notice;
mod observer;
mod wizard;

pub use fixtures::sample_garments;
pub use garment_list::{ConnectionStatus, GarmentListEvent, GarmentListView, BACKEND_UNAVAILABLE, LOADING_LABEL};
pub use image_upload::{
    ImageRejected, ImageUploadView, PreviewTicket, UploadEvent, CHANGE_IMAGE_OVERLAY, UPLOAD_HINT,
    UPLOAD_PLACEHOLDER,
};
pub use inventory::{
    item_icon, CategoryFilter, InventoryEvent, InventoryOptions, InventoryView, SidebarEntry, ALL_ITEMS,
    LOAD_FAILED_MESSAGE, SIDEBAR_LABELS,
};
pub use notice::{Notice, NoticeLevel};
pub use observer::{Observers, SubscriptionId};
pub use wizard::{
    AddItemWizard, PendingSubmit, StepIndicator, SubmitOutcome, SubmitTicket, WizardEvent, WizardStep,
    FAILURE_MESSAGE, SAVING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE,
};
