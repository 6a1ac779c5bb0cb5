// --- File: crates/detailbook_catalog/src/routes.rs ---

use crate::catalog::ServiceCatalog;
use crate::handlers::{list_reviews_handler, list_services_handler};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates a router serving the read-only catalog and reviews data.
pub fn routes(catalog: Arc<ServiceCatalog>) -> Router {
    Router::new()
        .route("/services", get(list_services_handler))
        .route("/reviews", get(list_reviews_handler))
        .with_state(catalog)
}
