#[cfg(test)]
mod tests {
    use crate::catalog::ServiceCatalog;
    use crate::handlers::{list_reviews_handler, list_services_handler};
    use axum::extract::State;
    use std::sync::Arc;

    const PACKAGES: &str = r#"{
        "packages": [
            { "name": "Express Wash", "price": 79, "description": "Quick exterior wash." }
        ]
    }"#;

    const REVIEWS: &str = r#"{
        "reviews": [
            { "stars": 5, "text": "Car looks brand new.", "author": "Dana R." }
        ]
    }"#;

    #[tokio::test]
    async fn serves_the_loaded_documents() {
        let catalog =
            Arc::new(ServiceCatalog::from_json(PACKAGES, Some(REVIEWS)).unwrap());

        let services = list_services_handler(State(catalog.clone())).await;
        assert_eq!(services.0.len(), 1);
        assert_eq!(services.0[0].slug, "express-wash");

        let reviews = list_reviews_handler(State(catalog)).await;
        assert_eq!(reviews.0.len(), 1);
        assert_eq!(reviews.0[0].author, "Dana R.");
    }
}
