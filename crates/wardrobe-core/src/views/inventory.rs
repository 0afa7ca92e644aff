//! Inventory View
//!
//! Category sidebar with live counts, client-side search and the item grid.
//! The collection is fetched once on mount and again after every successful
//! add from the wizard.

use log::{error, info};

use super::fixtures::sample_garments;
use super::notice::Notice;
use super::observer::{Observers, SubscriptionId};
use crate::api::{ApiResult, GarmentApi};
use crate::domain::{merge_by_id, Garment};

pub const ALL_ITEMS: &str = "All Items";

/// Sidebar entries, in display order
pub const SIDEBAR_LABELS: [&str; 7] = [ALL_ITEMS, "Fanatics", "Tops", "Bottoms", "Footwear", "Hats", "Accessories"];

pub const LOAD_FAILED_MESSAGE: &str = "Error loading inventory.";

/// Icon for a card, keyed by lowercase category label
pub fn item_icon(category_name: &str) -> &'static str {
    match category_name.to_lowercase().as_str() {
        "top" => "👕",
        "bottom" => "👖",
        "shoes" => "👟",
        "accessories" => "👜",
        "outerwear" => "🧥",
        _ => "👔",
    }
}

/// Which category the grid is restricted to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on `category_name`
    Label(String),
}

impl CategoryFilter {
    /// Parse a sidebar label; "All Items" means no restriction
    pub fn from_label(label: &str) -> Self {
        if label == ALL_ITEMS {
            CategoryFilter::All
        } else {
            CategoryFilter::Label(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_ITEMS,
            CategoryFilter::Label(label) => label,
        }
    }

    pub fn matches(&self, garment: &Garment) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Label(label) => garment.category_name == *label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventoryOptions {
    /// Append the demo garments to whatever the backend returns
    pub include_sample_items: bool,
}

/// One row of the category sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryEvent {
    Changed,
}

#[derive(Debug)]
pub struct InventoryView {
    options: InventoryOptions,
    items: Vec<Garment>,
    loading: bool,
    search_term: String,
    selected: CategoryFilter,
    notice: Option<Notice>,
    observers: Observers<InventoryEvent>,
}

impl InventoryView {
    /// Starts in the loading state until the first fetch completes
    pub fn new(options: InventoryOptions) -> Self {
        Self {
            options,
            items: Vec::new(),
            loading: true,
            search_term: String::new(),
            selected: CategoryFilter::All,
            notice: None,
            observers: Observers::default(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&InventoryEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn changed(&mut self) {
        self.observers.emit(&InventoryEvent::Changed);
    }

    pub fn options(&self) -> InventoryOptions {
        self.options
    }

    pub fn items(&self) -> &[Garment] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Hand the pending notice to the presentation layer
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    // ========================
    // Filtering
    // ========================

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: &str) {
        if self.search_term != term {
            self.search_term = term.to_string();
            self.changed();
        }
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn select_category(&mut self, label: &str) {
        let filter = CategoryFilter::from_label(label);
        if self.selected != filter {
            self.selected = filter;
            self.changed();
        }
    }

    fn matches_search(garment: &Garment, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [&garment.name, &garment.category_name, &garment.color]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Items passing both the category and the search filter
    pub fn filtered_items(&self) -> Vec<&Garment> {
        let needle = self.search_term.to_lowercase();
        self.items
            .iter()
            .filter(|garment| self.selected.matches(garment) && Self::matches_search(garment, &needle))
            .collect()
    }

    /// Sidebar rows with counts over the loaded collection
    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        SIDEBAR_LABELS
            .iter()
            .map(|&label| {
                let filter = CategoryFilter::from_label(label);
                SidebarEntry {
                    label,
                    count: self.items.iter().filter(|garment| filter.matches(garment)).count(),
                    active: filter == self.selected,
                }
            })
            .collect()
    }

    // ========================
    // Loading
    // ========================

    pub fn begin_refresh(&mut self) {
        if !self.loading {
            self.loading = true;
            self.changed();
        }
    }

    /// Apply a fetch result. Failures keep the current items.
    pub fn finish_refresh(&mut self, result: ApiResult<Vec<Garment>>) {
        match result {
            Ok(mut garments) => {
                if self.options.include_sample_items {
                    merge_by_id(&mut garments, sample_garments());
                }
                info!("Inventory loaded with {} items", garments.len());
                self.items = garments;
            }
            Err(e) => {
                error!("Error fetching inventory: {}", e);
                self.notice = Some(Notice::error(LOAD_FAILED_MESSAGE));
            }
        }
        self.loading = false;
        self.changed();
    }

    pub async fn refresh<A: GarmentApi + ?Sized>(&mut self, api: &A) {
        self.begin_refresh();
        let result = api.get_garments().await;
        self.finish_refresh(result);
    }
}
