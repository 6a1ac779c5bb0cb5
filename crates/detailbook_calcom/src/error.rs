// --- File: crates/detailbook_calcom/src/error.rs ---
use detailbook_common::{BookingError, HttpStatusCode};
use thiserror::Error;

/// Cal.com-specific error types.
#[derive(Error, Debug)]
pub enum CalcomError {
    /// Transport-level failure reaching the API
    #[error("Cal.com API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Cal.com API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// The API answered 2xx but the body did not decode
    #[error("Failed to parse Cal.com API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Cal.com configuration
    #[error("Cal.com configuration missing or incomplete")]
    ConfigError,
}

/// Convert CalcomError into the shared taxonomy.
impl From<CalcomError> for BookingError {
    fn from(err: CalcomError) -> Self {
        match err {
            CalcomError::RequestError(e) => BookingError::Network(e.to_string()),
            CalcomError::ApiError {
                status_code,
                message,
            } => BookingError::Upstream {
                status_code,
                message,
            },
            CalcomError::ParseError(e) => BookingError::Parse(e.to_string()),
            CalcomError::ConfigError => {
                BookingError::Config("Cal.com configuration missing or incomplete".to_string())
            }
        }
    }
}

impl HttpStatusCode for CalcomError {
    fn status_code(&self) -> u16 {
        match self {
            CalcomError::RequestError(_) => 502,
            CalcomError::ApiError { status_code, .. } => *status_code,
            CalcomError::ParseError(_) => 502,
            CalcomError::ConfigError => 500,
        }
    }
}
