// --- File: crates/detailbook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the booking flow.
///
/// The first four variants are the user-facing failure taxonomy; `Config`
/// and `Parse` cover the ambient layers (startup wiring, wire decoding).
/// Crate-specific errors convert into this via `From`.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Bad input detected locally; shown inline, never sent over the wire.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Transport failure talking to a remote service; retryable.
    #[error("Network request failed: {0}")]
    Network(String),

    /// The remote service was reachable but rejected the request.
    #[error("Upstream service rejected the request: {message} (Status: {status_code})")]
    Upstream { status_code: u16, message: String },

    /// An invalid UI transition was attempted. This is an invariant
    /// violation: logged, and the caller stays in its nearest valid state.
    #[error("Invalid state transition: {0}")]
    State(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A document or response could not be decoded.
    #[error("Failed to parse data: {0}")]
    Parse(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::Validation(_) => 400,
            BookingError::Network(_) => 502,
            BookingError::Upstream { status_code, .. } => *status_code,
            BookingError::State(_) => 500,
            BookingError::Config(_) => 500,
            BookingError::Parse(_) => 502,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for BookingError {
    fn from(err: reqwest::Error) -> Self {
        BookingError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::Parse(err.to_string())
    }
}

// Utility constructors
pub fn validation_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Validation(message.to_string())
}

pub fn network_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Network(message.to_string())
}

pub fn upstream_error<T: fmt::Display>(status_code: u16, message: T) -> BookingError {
    BookingError::Upstream {
        status_code,
        message: message.to_string(),
    }
}

pub fn state_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::State(message.to_string())
}

pub fn config_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Config(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_passes_through() {
        let err = upstream_error(409, "slot no longer available");
        assert_eq!(err.status_code(), 409);
        assert!(err.to_string().contains("slot no longer available"));
    }

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(validation_error("missing email").status_code(), 400);
        assert_eq!(network_error("timed out").status_code(), 502);
        assert_eq!(state_error("no day selected").status_code(), 500);
    }
}
