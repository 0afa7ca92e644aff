//! Garment List
//!
//! Connectivity demo: probe the backend, then list whatever it returns.

use log::{error, info};

use super::notice::Notice;
use super::observer::{Observers, SubscriptionId};
use crate::api::{ApiResult, GarmentApi, HelloResponse};
use crate::domain::Garment;

pub const BACKEND_UNAVAILABLE: &str = "Failed to connect to backend. Make sure Django server is running.";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    /// Greeting returned by the probe
    Connected(String),
    Failed,
}

impl ConnectionStatus {
    pub fn label(&self) -> String {
        match self {
            ConnectionStatus::Connecting => "Connecting...".to_string(),
            ConnectionStatus::Connected(message) => format!("✅ {}", message),
            ConnectionStatus::Failed => "❌ Connection failed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarmentListEvent {
    Changed,
}

#[derive(Debug)]
pub struct GarmentListView {
    status: ConnectionStatus,
    garments: Vec<Garment>,
    loading: bool,
    error: Option<Notice>,
    observers: Observers<GarmentListEvent>,
}

impl Default for GarmentListView {
    fn default() -> Self {
        Self::new()
    }
}

impl GarmentListView {
    pub fn new() -> Self {
        Self {
            status: ConnectionStatus::Connecting,
            garments: Vec::new(),
            loading: true,
            error: None,
            observers: Observers::default(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GarmentListEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set once any step of the load has failed
    pub fn error(&self) -> Option<&Notice> {
        self.error.as_ref()
    }

    fn fail(&mut self) {
        self.status = ConnectionStatus::Failed;
        self.error = Some(Notice::error(BACKEND_UNAVAILABLE));
        self.garments.clear();
        self.loading = false;
        self.observers.emit(&GarmentListEvent::Changed);
    }

    /// Apply the connectivity probe. Returns whether the fetch should follow.
    pub fn finish_probe(&mut self, result: ApiResult<HelloResponse>) -> bool {
        match result {
            Ok(hello) => {
                info!("Backend says: {}", hello.message);
                self.status = ConnectionStatus::Connected(hello.message);
                self.observers.emit(&GarmentListEvent::Changed);
                true
            }
            Err(e) => {
                error!("Connection test failed: {}", e);
                self.fail();
                false
            }
        }
    }

    pub fn finish_fetch(&mut self, result: ApiResult<Vec<Garment>>) {
        match result {
            Ok(garments) => {
                self.garments = garments;
                self.loading = false;
                self.observers.emit(&GarmentListEvent::Changed);
            }
            Err(e) => {
                error!("Fetching garments failed: {}", e);
                self.fail();
            }
        }
    }

    /// Probe, then fetch. Runs once per mount.
    pub async fn load<A: GarmentApi + ?Sized>(&mut self, api: &A) {
        let probe = api.test_connection().await;
        if self.finish_probe(probe) {
            let garments = api.get_garments().await;
            self.finish_fetch(garments);
        }
    }
}
