#[cfg(test)]
mod tests {
    use crate::catalog::ServiceCatalog;
    use crate::models::slugify;

    const PACKAGES: &str = r#"{
        "packages": [
            {
                "name": "Express Wash",
                "price": 79,
                "duration": "45 mins",
                "description": "Quick exterior wash and dry for a clean shine.",
                "features": ["Hand wash", "Wheel cleaning", "Spray wax"]
            },
            {
                "name": "Full Detail",
                "slug": "full-detail",
                "price": 249,
                "description": "Comprehensive inside and out detail for showroom shine.",
                "features": ["Everything in Express Wash", "Deep interior clean"],
                "addons": [{ "name": "Pet hair removal", "price": 35 }],
                "ctaLabel": "Book now",
                "priceLabel": "from $249"
            }
        ]
    }"#;

    const REVIEWS: &str = r#"{
        "reviews": [
            { "stars": 5, "text": "Car looks brand new.", "author": "Dana R." },
            { "stars": 9, "text": "bogus rating", "author": "nobody" },
            { "stars": 4, "text": "Great communication.", "author": "Miguel A." }
        ]
    }"#;

    #[test]
    fn parses_packages_and_derives_missing_slugs() {
        let catalog = ServiceCatalog::from_json(PACKAGES, None).unwrap();
        assert_eq!(catalog.services().len(), 2);

        let express = catalog.find_by_slug("express-wash").unwrap();
        assert_eq!(express.name, "Express Wash");
        assert_eq!(express.price, 79);
        assert_eq!(express.duration.as_deref(), Some("45 mins"));

        let full = catalog.find_by_name("full detail").unwrap();
        assert_eq!(full.slug, "full-detail");
        assert_eq!(full.addons[0].name, "Pet hair removal");
    }

    #[test]
    fn out_of_range_reviews_are_skipped() {
        let catalog = ServiceCatalog::from_json(PACKAGES, Some(REVIEWS)).unwrap();
        assert_eq!(catalog.reviews().len(), 2);
        assert!(catalog.reviews().iter().all(|r| (1..=5).contains(&r.stars)));
    }

    #[test]
    fn malformed_catalog_is_a_parse_error() {
        let result = ServiceCatalog::from_json("{\"packages\": [{}]}", None);
        assert!(result.is_err());
    }

    #[test]
    fn slugify_matches_event_type_naming() {
        assert_eq!(slugify("Express Wash"), "express-wash");
        assert_eq!(slugify("Interior Refresh"), "interior-refresh");
        assert_eq!(slugify("  Full   Detail "), "full-detail");
        assert_eq!(slugify("Wash & Wax"), "wash-wax");
    }
}
