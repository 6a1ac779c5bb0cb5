// --- File: crates/detailbook_booking/src/flow.rs ---
use crate::form::BookingForm;
use crate::submitter::BookingSubmitter;
use chrono_tz::Tz;
use detailbook_catalog::{SelectionObserver, ServiceCatalog, ServiceSelector};
use detailbook_common::{BookingConfirmation, BookingError, SchedulingService};
use detailbook_picker::AvailabilityPicker;
use std::sync::Arc;
use tracing::info;

/// Wires the booking page together: the service selector, the availability
/// picker and the submitter, with the selector's shared selected-service
/// handle passed to the picker explicitly at construction.
///
/// Owns the end-of-flow rules: a confirmed booking resets the whole page
/// state; an upstream rejection keeps the picker's selection so the visitor
/// can retry or pick another time without starting over.
pub struct BookingFlow {
    selector: Arc<ServiceSelector>,
    picker: Arc<AvailabilityPicker>,
    submitter: BookingSubmitter,
}

impl BookingFlow {
    pub fn new(
        catalog: Arc<ServiceCatalog>,
        scheduler: Arc<dyn SchedulingService>,
        venue_zone: Tz,
        language: impl Into<String>,
    ) -> Self {
        let selector = Arc::new(ServiceSelector::new(catalog));
        let picker = Arc::new(AvailabilityPicker::new(
            Arc::clone(&scheduler),
            selector.handle(),
            venue_zone,
        ));
        selector.subscribe(Arc::clone(&picker) as Arc<dyn SelectionObserver>);

        BookingFlow {
            selector,
            picker,
            submitter: BookingSubmitter::new(scheduler, venue_zone.name(), language),
        }
    }

    pub fn selector(&self) -> &ServiceSelector {
        &self.selector
    }

    pub fn picker(&self) -> &AvailabilityPicker {
        &self.picker
    }

    /// Validates and submits the booking composed from the form, the
    /// selected service and the picker's committed date-time choice.
    ///
    /// Every client-detectable problem is reported in one `Validation`
    /// error before anything goes over the wire. On success the form, the
    /// selection and the picker are all returned to their initial state;
    /// on failure everything stays put for a retry.
    pub async fn submit(
        &self,
        form: &mut BookingForm,
    ) -> Result<BookingConfirmation, BookingError> {
        let mut issues = form.issues();
        let slug = self.selector.selected().map(|service| service.slug);
        if slug.is_none() {
            issues.push("Please select a service.".to_string());
        }
        let start = self.picker.selection().time();
        if start.is_none() {
            issues.push("Please select a date and time.".to_string());
        }
        let (slug, start) = match (slug, start) {
            (Some(slug), Some(start)) if issues.is_empty() => (slug, start),
            _ => return Err(BookingError::Validation(issues.join(" "))),
        };

        let confirmation = self.submitter.submit(form, &slug, start).await?;

        // Clearing the selector cascades into the picker through the
        // observer subscription; the form is wiped last.
        self.selector.clear();
        *form = BookingForm::default();
        info!(reference = %confirmation.reference, "booking flow reset after confirmation");
        Ok(confirmation)
    }
}
