// --- File: crates/detailbook_common/src/services.rs ---
//! Service abstraction over the external scheduling API.
//!
//! The picker and the submitter depend on this trait rather than on the
//! concrete Cal.com client, so tests can drive them with in-memory stubs
//! and the same flow works in direct and relayed deployments.

use crate::error::BookingError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// The person the appointment is booked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
    /// IANA time zone name the attendee sees confirmations in.
    pub time_zone: String,
    pub language: String,
}

/// A fully composed booking, ready for submission.
///
/// Built fresh per submission attempt and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingOrder {
    /// Stable identifier of the booked service's event type.
    pub event_type_slug: String,
    /// Appointment start as an absolute instant.
    pub start: DateTime<Utc>,
    pub attendee: Attendee,
    /// Free-form service location (street address for mobile detailing).
    pub location: Option<String>,
    /// Contact phone, forwarded as booking metadata.
    pub phone: String,
}

/// Result of a successful booking submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Upstream confirmation identifier.
    pub reference: String,
    pub status: String,
}

/// Operations the booking flow needs from a scheduling backend.
pub trait SchedulingService: Send + Sync {
    /// Bookable start instants for one service on one venue-local calendar
    /// day. A day with no availability resolves to an empty Ok vec; errors
    /// mean the fetch itself failed and must stay distinguishable from
    /// "no slots".
    fn slots_for_date(
        &self,
        event_type_slug: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<DateTime<Utc>>, BookingError>;

    /// Submit a booking.
    fn create_booking(&self, order: BookingOrder)
        -> BoxFuture<'_, BookingConfirmation, BookingError>;
}
