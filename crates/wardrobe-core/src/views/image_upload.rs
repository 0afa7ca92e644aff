//! Image Upload Widget
//!
//! Accepts a file from the picker or a drop, rejects anything that is not an
//! image, hands accepted files to the owner and keeps a local preview.
//!
//! Selection is two-phase: `begin_read` checks the MIME type and hands out a
//! ticket before any bytes are read, `finish_read` applies the file once its
//! contents are in memory. Only the newest ticket is ever applied.

use thiserror::Error;

use super::observer::{Observers, SubscriptionId};
use crate::domain::{is_image_mime, resolve_mime_type, ImageFile};

pub const UPLOAD_PLACEHOLDER: &str = "Click to upload or drag and drop";
/// Informational only: the size limit is not enforced
pub const UPLOAD_HINT: &str = "PNG, JPG up to 10MB";
pub const CHANGE_IMAGE_OVERLAY: &str = "Click or drag to change image";

/// A non-image file was offered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please select an image file")]
pub struct ImageRejected {
    pub mime_type: String,
}

/// Identifies one file read; only the latest ticket may be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreviewTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadEvent {
    Changed,
}

/// View model behind one image upload widget
pub struct ImageUploadView {
    on_image_select: Box<dyn FnMut(ImageFile)>,
    class_name: String,
    preview: Option<String>,
    drag_over: bool,
    latest_ticket: u64,
    observers: Observers<UploadEvent>,
}

impl ImageUploadView {
    pub fn new(on_image_select: impl FnMut(ImageFile) + 'static) -> Self {
        Self {
            on_image_select: Box::new(on_image_select),
            class_name: String::new(),
            preview: None,
            drag_over: false,
            latest_ticket: 0,
            observers: Observers::default(),
        }
    }

    /// Start with an existing image shown as the preview
    pub fn with_current_image_url(mut self, url: Option<String>) -> Self {
        self.preview = url;
        self
    }

    /// Extra CSS class for the outer container
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&UploadEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn container_class(&self) -> String {
        if self.class_name.is_empty() {
            "image-upload".to_string()
        } else {
            format!("image-upload {}", self.class_name)
        }
    }

    pub fn area_class(&self) -> &'static str {
        if self.drag_over {
            "upload-area drag-over"
        } else {
            "upload-area"
        }
    }

    // ========================
    // Drag State
    // ========================

    pub fn drag_over(&mut self) {
        self.set_drag_over(true);
    }

    pub fn drag_leave(&mut self) {
        self.set_drag_over(false);
    }

    /// Handle a drop; only the first dropped file counts
    pub fn drop_file(&mut self, name: &str, mime_type: &str) -> Result<PreviewTicket, ImageRejected> {
        self.set_drag_over(false);
        self.begin_read(name, mime_type)
    }

    fn set_drag_over(&mut self, drag_over: bool) {
        if self.drag_over != drag_over {
            self.drag_over = drag_over;
            self.observers.emit(&UploadEvent::Changed);
        }
    }

    // ========================
    // Selection
    // ========================

    /// Check a picked file before its contents are read.
    ///
    /// Rejected files change nothing. Accepted files get a ticket that
    /// supersedes every earlier one.
    pub fn begin_read(&mut self, name: &str, mime_type: &str) -> Result<PreviewTicket, ImageRejected> {
        let mime_type = resolve_mime_type(name, mime_type);
        if !is_image_mime(&mime_type) {
            log::warn!("Rejected non-image file {:?} ({})", name, mime_type);
            return Err(ImageRejected { mime_type });
        }
        self.latest_ticket += 1;
        Ok(PreviewTicket(self.latest_ticket))
    }

    /// Apply a finished read: hand the file to the owner and show it.
    /// Stale tickets are dropped without touching either.
    pub fn finish_read(&mut self, ticket: PreviewTicket, file: ImageFile) -> bool {
        if ticket.0 != self.latest_ticket {
            log::debug!("Dropping stale read of {:?} ({:?})", file.name, ticket);
            return false;
        }
        self.preview = Some(file.data_url());
        (self.on_image_select)(file);
        self.observers.emit(&UploadEvent::Changed);
        true
    }

    /// Accept a file whose bytes are already in memory
    pub fn select(&mut self, file: ImageFile) -> Result<(), ImageRejected> {
        let ticket = self.begin_read(&file.name, &file.mime_type)?;
        self.finish_read(ticket, file);
        Ok(())
    }
}
