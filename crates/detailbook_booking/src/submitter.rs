// --- File: crates/detailbook_booking/src/submitter.rs ---
use crate::form::BookingForm;
use chrono::{DateTime, Utc};
use detailbook_common::{
    state_error, Attendee, BookingConfirmation, BookingError, BookingOrder, SchedulingService,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Submits composed bookings to the scheduling backend.
///
/// Validation failures never reach the wire, and overlapping submissions
/// are rejected: the in-flight flag plays the role of a disabled submit
/// button, set until the response lands.
pub struct BookingSubmitter {
    scheduler: Arc<dyn SchedulingService>,
    /// IANA zone the attendee sees confirmations in.
    time_zone: String,
    language: String,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag however `submit` returns.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl BookingSubmitter {
    pub fn new(
        scheduler: Arc<dyn SchedulingService>,
        time_zone: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        BookingSubmitter {
            scheduler,
            time_zone: time_zone.into(),
            language: language.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Validates the form and submits a booking for the given service and
    /// start instant.
    ///
    /// Failure taxonomy: `Validation` for client-detectable problems (no
    /// network call is made), `Network`/`Upstream` passed through from the
    /// scheduling backend, `State` for a submission attempted while another
    /// is still in flight.
    pub async fn submit(
        &self,
        form: &BookingForm,
        event_type_slug: &str,
        start: DateTime<Utc>,
    ) -> Result<BookingConfirmation, BookingError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("booking submission ignored: another one is in flight");
            return Err(state_error("a booking submission is already in flight"));
        }
        let _guard = InFlightGuard(&self.in_flight);

        let issues = form.issues();
        if !issues.is_empty() {
            return Err(BookingError::Validation(issues.join(" ")));
        }

        let order = BookingOrder {
            event_type_slug: event_type_slug.to_string(),
            start,
            attendee: Attendee {
                name: form.name.trim().to_string(),
                email: form.email.trim().to_string(),
                time_zone: self.time_zone.clone(),
                language: self.language.clone(),
            },
            location: Some(form.service_address()),
            phone: form.phone.trim().to_string(),
        };

        match self.scheduler.create_booking(order).await {
            Ok(confirmation) => {
                info!(
                    reference = %confirmation.reference,
                    event_type_slug,
                    "booking confirmed"
                );
                Ok(confirmation)
            }
            Err(err) => {
                warn!(error = %err, event_type_slug, "booking submission failed");
                Err(err)
            }
        }
    }
}
