//! Add-Item Wizard
//!
//! Four-step linear form: upload image, overview, description, review.
//! Submission validates the draft, posts one multipart request and either
//! resets the wizard (success) or leaves the draft intact (failure).

use log::{error, info, warn};

use super::notice::Notice;
use super::observer::{Observers, SubscriptionId};
use crate::api::{ApiResult, GarmentApi};
use crate::domain::{DraftField, DraftItem, GarmentUpload, ImageFile, ValidationError};

pub const SUCCESS_MESSAGE: &str = "Item added successfully!";
pub const FAILURE_MESSAGE: &str = "Error saving item. Please try again.";
pub const SUBMIT_LABEL: &str = "Add to Wardrobe";
pub const SAVING_LABEL: &str = "Saving...";

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    UploadImage,
    ItemOverview,
    ItemDescription,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::UploadImage,
        WizardStep::ItemOverview,
        WizardStep::ItemDescription,
        WizardStep::Review,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::UploadImage => "Upload Image",
            WizardStep::ItemOverview => "Item Overview",
            WizardStep::ItemDescription => "Item Description",
            WizardStep::Review => "Review Item",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WizardStep::UploadImage => "Add a photo of your item",
            WizardStep::ItemOverview => "Fill out necessary details",
            WizardStep::ItemDescription => "Add more details",
            WizardStep::Review => "Review and save",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Review
    }
}

/// How a step dot is drawn relative to the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIndicator {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// Any state mutation
    Changed,
    /// A submission was accepted by the backend
    ItemAdded,
    Closed,
}

/// Ties an in-flight submission to the wizard session that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    session: u64,
}

/// Validated request waiting to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit {
    pub ticket: SubmitTicket,
    pub upload: GarmentUpload,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Not on the review step, or a submission is already in flight
    NotReady,
    Rejected(ValidationError),
    Saved,
    /// The request failed; carries the diagnostic detail
    Failed(String),
    /// The wizard was closed while the request was in flight
    Abandoned,
}

impl SubmitOutcome {
    /// What the user should be told, if anything
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Rejected(reason) => Some(Notice::error(reason.to_string())),
            SubmitOutcome::Saved => Some(Notice::success(SUCCESS_MESSAGE)),
            SubmitOutcome::Failed(_) => Some(Notice::error(FAILURE_MESSAGE)),
            SubmitOutcome::NotReady | SubmitOutcome::Abandoned => None,
        }
    }
}

/// View model behind the add-item modal
#[derive(Debug, Default)]
pub struct AddItemWizard {
    open: bool,
    step: WizardStep,
    draft: DraftItem,
    submitting: bool,
    /// Bumped on every close so late responses can be recognized
    session: u64,
    observers: Observers<WizardEvent>,
}

impl AddItemWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&WizardEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn changed(&mut self) {
        self.observers.emit(&WizardEvent::Changed);
    }

    // ========================
    // Open / Close
    // ========================

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.changed();
        }
    }

    /// Close at any step, discarding the draft without confirmation
    pub fn close(&mut self) {
        self.open = false;
        self.step = WizardStep::UploadImage;
        self.draft = DraftItem::default();
        self.submitting = false;
        self.session += 1;
        self.changed();
        self.observers.emit(&WizardEvent::Closed);
    }

    // ========================
    // Navigation
    // ========================

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn next(&mut self) {
        if let Some(step) = self.step.next() {
            self.step = step;
            self.changed();
        }
    }

    pub fn prev(&mut self) {
        if let Some(step) = self.step.prev() {
            self.step = step;
            self.changed();
        }
    }

    pub fn step_indicators(&self) -> Vec<(WizardStep, StepIndicator)> {
        WizardStep::ALL
            .into_iter()
            .map(|step| {
                let indicator = match step.cmp(&self.step) {
                    std::cmp::Ordering::Less => StepIndicator::Completed,
                    std::cmp::Ordering::Equal => StepIndicator::Active,
                    std::cmp::Ordering::Greater => StepIndicator::Upcoming,
                };
                (step, indicator)
            })
            .collect()
    }

    // ========================
    // Draft
    // ========================

    pub fn draft(&self) -> &DraftItem {
        &self.draft
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) {
        self.draft.set_field(field, value);
        self.changed();
    }

    pub fn set_image(&mut self, image: ImageFile) {
        self.draft.image = Some(image);
        self.changed();
    }

    pub fn review_lines(&self) -> Vec<(&'static str, String)> {
        self.draft.review_lines()
    }

    // ========================
    // Submission
    // ========================

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SAVING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validate and mark the wizard as submitting.
    ///
    /// `Err` carries the outcome to report when nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitOutcome> {
        if !self.open || !self.step.is_last() || self.submitting {
            return Err(SubmitOutcome::NotReady);
        }
        let upload = self.draft.validate().map_err(|reason| {
            warn!("Rejected submission: {}", reason);
            SubmitOutcome::Rejected(reason)
        })?;

        self.submitting = true;
        self.changed();
        Ok(PendingSubmit {
            ticket: SubmitTicket {
                session: self.session,
            },
            upload,
        })
    }

    /// Apply the backend's answer to a submission started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: ApiResult<()>) -> SubmitOutcome {
        if ticket.session != self.session {
            // The draft this request came from is gone; only the grid cares.
            return match result {
                Ok(()) => {
                    info!("Item saved after the wizard was closed");
                    self.observers.emit(&WizardEvent::ItemAdded);
                    SubmitOutcome::Abandoned
                }
                Err(e) => {
                    error!("Error submitting form after close: {}", e);
                    SubmitOutcome::Abandoned
                }
            };
        }

        match result {
            Ok(()) => {
                self.observers.emit(&WizardEvent::ItemAdded);
                self.close();
                SubmitOutcome::Saved
            }
            Err(e) => {
                error!("Error submitting form: {}", e);
                self.submitting = false;
                self.changed();
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    /// Validate, send and apply the result in one go
    pub async fn submit<A: GarmentApi + ?Sized>(&mut self, api: &A) -> SubmitOutcome {
        let PendingSubmit { ticket, upload } = match self.begin_submit() {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let result = api.upload_garment(&upload).await;
        self.finish_submit(ticket, result)
    }
}
