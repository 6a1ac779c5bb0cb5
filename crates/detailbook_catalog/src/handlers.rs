// --- File: crates/detailbook_catalog/src/handlers.rs ---
use crate::catalog::ServiceCatalog;
use crate::models::{Review, Service};
use axum::{extract::State, response::Json};
use std::sync::Arc;

/// Handler serving the bookable service catalog.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "All bookable services", body = [Service])
    ),
    tag = "Catalog"
))]
pub async fn list_services_handler(
    State(catalog): State<Arc<ServiceCatalog>>,
) -> Json<Vec<Service>> {
    Json(catalog.services().to_vec())
}

/// Handler serving the customer reviews feed.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/reviews",
    responses(
        (status = 200, description = "Published customer reviews", body = [Review])
    ),
    tag = "Catalog"
))]
pub async fn list_reviews_handler(
    State(catalog): State<Arc<ServiceCatalog>>,
) -> Json<Vec<Review>> {
    Json(catalog.reviews().to_vec())
}
