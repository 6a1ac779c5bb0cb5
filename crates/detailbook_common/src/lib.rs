// --- File: crates/detailbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, network_error, state_error, upstream_error, validation_error, BookingError,
    HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export the scheduling abstraction
pub use services::{
    Attendee, BookingConfirmation, BookingOrder, BoxFuture, SchedulingService,
};
