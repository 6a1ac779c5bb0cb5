// File: services/detailbook_backend/src/main.rs
use axum::{routing::get, Router};
use detailbook_calcom::routes as calcom_routes;
use detailbook_catalog::{routes as catalog_routes, ServiceCatalog};
use detailbook_config::load_config;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    detailbook_common::logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    let api_router = Router::new().route("/", get(|| async { "Welcome to the Detailbook API!" }));

    let catalog_router = config.catalog.as_ref().map(|catalog_config| {
        let packages_path = catalog_config
            .packages_path
            .as_deref()
            .unwrap_or("data/services.json");
        let reviews_path = catalog_config.reviews_path.as_deref().map(Path::new);
        let catalog = ServiceCatalog::load(packages_path, reviews_path)
            .expect("Failed to load catalog documents");
        info!(
            services = catalog.services().len(),
            reviews = catalog.reviews().len(),
            "catalog loaded"
        );
        catalog_routes::routes(Arc::new(catalog))
    });

    let api_router = Router::new().nest("/api", {
        let mut router = api_router;
        if config.use_calcom {
            router = router.merge(calcom_routes::routes(config.clone()));
        } else {
            warn!("use_calcom is off; the relay exposes no scheduling routes");
        }
        if let Some(catalog_router) = catalog_router {
            router = router.merge(catalog_router);
        }
        router
    });

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use detailbook_calcom::doc::CalcomApiDoc;
        use detailbook_catalog::doc::CatalogApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Detailbook API",
                version = "0.1.0",
                description = "Booking relay for the Detailbook site",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Detailbook", description = "Core relay endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CalcomApiDoc::openapi());
        openapi_doc.merge(CatalogApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the static site in dev mode so the booking page and the relay
    // share an origin locally
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from ./site");
        app = app.fallback_service(ServeDir::new("site"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
