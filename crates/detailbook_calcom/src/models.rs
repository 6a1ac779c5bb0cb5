// --- File: crates/detailbook_calcom/src/models.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- Availability ---

/// Query parameters of `GET /slots`, mirroring the upstream contract so the
/// browser client and the relay speak the same shape.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct SlotsQuery {
    /// Cal.com account username
    pub username: String,
    /// Event type slug of the service being booked
    pub event_type_slug: String,
    /// Range start as a venue-local calendar date (YYYY-MM-DD)
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-01-05"))]
    pub start: String,
    /// Range end as a venue-local calendar date (YYYY-MM-DD), inclusive
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-01-11"))]
    pub end: String,
}

/// One bookable start instant.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotStart {
    pub start: DateTime<Utc>,
}

/// `GET /slots` response: slots keyed by the venue-local calendar date they
/// belong to. Days without availability are simply absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotsResponse {
    pub data: BTreeMap<String, Vec<SlotStart>>,
}

// --- Booking ---

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AttendeeInput {
    pub name: String,
    pub email: String,
    pub time_zone: String,
    pub language: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingMetadata {
    pub phone: String,
}

/// Body of `POST /bookings`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub username: String,
    pub event_type_slug: String,
    /// Appointment start, UTC-normalized
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-05T21:30:00Z"))]
    pub start: DateTime<Utc>,
    pub attendee: AttendeeInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub metadata: BookingMetadata,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatedBooking {
    /// Confirmation identifier
    pub uid: Option<String>,
    pub id: Option<i64>,
    pub status: Option<String>,
}

/// `POST /bookings` success body.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<CreatedBooking>,
}
