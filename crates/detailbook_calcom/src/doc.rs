// File: crates/detailbook_calcom/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::models::{
    AttendeeInput, BookingMetadata, CreateBookingRequest, CreateBookingResponse, CreatedBooking,
    SlotStart, SlotsQuery, SlotsResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_slots_handler,
        crate::handlers::create_booking_handler
    ),
    components(
        schemas(
            SlotsQuery,
            SlotStart,
            SlotsResponse,
            AttendeeInput,
            BookingMetadata,
            CreateBookingRequest,
            CreatedBooking,
            CreateBookingResponse
        )
    ),
    tags(
        (name = "Calcom", description = "Scheduling relay API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct CalcomApiDoc;
