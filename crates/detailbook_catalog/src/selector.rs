// --- File: crates/detailbook_catalog/src/selector.rs ---
use crate::catalog::ServiceCatalog;
use crate::models::Service;
use detailbook_common::{validation_error, BookingError};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Gets told when the selected service changes.
///
/// An explicit subscription between the selector and its dependents, so
/// nothing couples through ambient event names.
pub trait SelectionObserver: Send + Sync {
    fn service_selected(&self, service: &Service);
    fn selection_cleared(&self) {}
}

/// Shared handle to the currently selected service.
///
/// This is the single piece of cross-component shared state in the flow.
/// The [`ServiceSelector`] is its only writer; the picker and submitter
/// hold read-only clones passed in explicitly at construction.
#[derive(Debug, Clone, Default)]
pub struct SelectedService {
    inner: Arc<RwLock<Option<Service>>>,
}

impl SelectedService {
    pub fn get(&self) -> Option<Service> {
        self.inner.read().unwrap().clone()
    }

    pub fn slug(&self) -> Option<String> {
        self.inner.read().unwrap().as_ref().map(|s| s.slug.clone())
    }

    fn set(&self, service: Option<Service>) {
        *self.inner.write().unwrap() = service;
    }
}

/// Tracks which service the visitor is booking. Exactly one service can be
/// selected at a time; selecting another replaces it. No network calls.
pub struct ServiceSelector {
    catalog: Arc<ServiceCatalog>,
    selected: SelectedService,
    observers: RwLock<Vec<Arc<dyn SelectionObserver>>>,
}

impl ServiceSelector {
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        ServiceSelector {
            catalog,
            selected: SelectedService::default(),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Read-only clone of the shared selected-service handle.
    pub fn handle(&self) -> SelectedService {
        self.selected.clone()
    }

    pub fn subscribe(&self, observer: Arc<dyn SelectionObserver>) {
        self.observers.write().unwrap().push(observer);
    }

    /// Marks the service with the given slug as selected, replacing any
    /// prior selection, and notifies subscribers.
    pub fn select(&self, slug: &str) -> Result<Service, BookingError> {
        let service = self
            .catalog
            .find_by_slug(slug)
            .cloned()
            .ok_or_else(|| validation_error(format!("unknown service: {slug}")))?;

        self.selected.set(Some(service.clone()));
        info!(service = %service.name, slug = %service.slug, "service selected");

        for observer in self.observers.read().unwrap().iter() {
            observer.service_selected(&service);
        }
        Ok(service)
    }

    pub fn selected(&self) -> Option<Service> {
        self.selected.get()
    }

    /// Empties the selection (e.g. after a successful booking).
    pub fn clear(&self) {
        self.selected.set(None);
        for observer in self.observers.read().unwrap().iter() {
            observer.selection_cleared();
        }
    }
}
