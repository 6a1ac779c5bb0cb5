// --- File: crates/detailbook_calcom/src/handlers.rs ---
use crate::client::CalcomClient;
use crate::models::{CreateBookingRequest, CreateBookingResponse, SlotsQuery, SlotsResponse};
use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::NaiveDate;
use detailbook_common::{validation_error, BookingError};
use std::sync::Arc;
use tracing::{debug, error};

/// Handler relaying the availability query to Cal.com with server-held
/// credentials.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/slots",
    params(SlotsQuery),
    responses(
        (status = 200, description = "Bookable slots keyed by venue-local date", body = SlotsResponse),
        (status = 400, description = "Bad request (e.g., invalid date format)"),
        (status = 502, description = "Scheduling service unreachable")
    ),
    tag = "Calcom"
))]
pub async fn get_slots_handler(
    State(client): State<Arc<CalcomClient>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, BookingError> {
    // Sanity-check the range without reinterpreting it; the date strings go
    // upstream verbatim so the venue-local business day is preserved.
    let start = NaiveDate::parse_from_str(&query.start, "%Y-%m-%d")
        .map_err(|_| validation_error("Invalid start format (YYYY-MM-DD)"))?;
    let end = NaiveDate::parse_from_str(&query.end, "%Y-%m-%d")
        .map_err(|_| validation_error("Invalid end format (YYYY-MM-DD)"))?;
    if end < start {
        return Err(validation_error("end must not be before start"));
    }
    if query.username != client.username() {
        debug!(requested = %query.username, "ignoring client-supplied username");
    }

    match client
        .slots_in_range(&query.event_type_slug, &query.start, &query.end)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!(error = %err, "relay slots fetch failed");
            Err(err.into())
        }
    }
}

/// Handler relaying a booking submission to Cal.com.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking confirmed", body = CreateBookingResponse),
        (status = 400, description = "Missing attendee fields"),
        (status = 409, description = "Slot no longer available"),
        (status = 502, description = "Scheduling service unreachable")
    ),
    tag = "Calcom"
))]
pub async fn create_booking_handler(
    State(client): State<Arc<CalcomClient>>,
    Json(mut payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, BookingError> {
    if payload.attendee.name.trim().is_empty() || payload.attendee.email.trim().is_empty() {
        return Err(validation_error("Attendee name and email are required."));
    }
    if payload.event_type_slug.trim().is_empty() {
        return Err(validation_error("eventTypeSlug is required."));
    }
    // The relay books under its configured account regardless of what the
    // client claims.
    payload.username = client.username().to_string();

    match client.create_booking(&payload).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!(error = %err, "relay booking failed");
            Err(err.into())
        }
    }
}
