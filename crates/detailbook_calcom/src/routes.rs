// --- File: crates/detailbook_calcom/src/routes.rs ---

use crate::client::CalcomClient;
use crate::handlers::{create_booking_handler, get_slots_handler};
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use detailbook_config::AppConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Creates a router containing the relay routes for the Cal.com feature.
///
/// The booking widget runs on the public site, so the routes answer CORS
/// preflights for any origin; the credentials only ever live in this
/// process.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let calcom_config = config.calcom.as_ref().expect("Cal.com config missing");
    let client = CalcomClient::direct(calcom_config)
        .expect("Cal.com API key missing (set APP_CALCOM__API_KEY)");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/slots", get(get_slots_handler))
        .route("/bookings", post(create_booking_handler))
        .layer(cors)
        .with_state(Arc::new(client))
}
