// File: crates/detailbook_catalog/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::models::{Addon, Review, Service};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_services_handler,
        crate::handlers::list_reviews_handler
    ),
    components(schemas(Addon, Service, Review)),
    tags(
        (name = "Catalog", description = "Service catalog and reviews")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct CatalogApiDoc;
