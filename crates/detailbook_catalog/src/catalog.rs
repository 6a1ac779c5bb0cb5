// --- File: crates/detailbook_catalog/src/catalog.rs ---
use crate::models::{Review, ReviewsDocument, Service, ServiceDocument};
use detailbook_common::BookingError;
use std::path::Path;
use tracing::warn;

/// The loaded service catalog plus the reviews feed.
///
/// Both documents are read-only JSON; the struct is the in-memory cache and
/// lives for the whole process (wrap in `Arc` to share). There is no
/// invalidation beyond loading a fresh catalog and replacing the old one.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    services: Vec<Service>,
    reviews: Vec<Review>,
}

impl ServiceCatalog {
    /// Builds a catalog from raw JSON documents. `reviews_json` is optional
    /// because the booking page can render without the feed.
    pub fn from_json(
        packages_json: &str,
        reviews_json: Option<&str>,
    ) -> Result<Self, BookingError> {
        let document: ServiceDocument = serde_json::from_str(packages_json)?;
        let services: Vec<Service> = document.packages.into_iter().map(Service::from).collect();

        let reviews = match reviews_json {
            Some(raw) => {
                let document: ReviewsDocument = serde_json::from_str(raw)?;
                document
                    .reviews
                    .into_iter()
                    .filter(|review| {
                        let valid = (1..=5).contains(&review.stars);
                        if !valid {
                            warn!(
                                stars = review.stars,
                                author = %review.author,
                                "skipping review with out-of-range star rating"
                            );
                        }
                        valid
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        Ok(ServiceCatalog { services, reviews })
    }

    /// Reads the catalog (and optionally the reviews feed) from disk.
    pub fn load(
        packages_path: impl AsRef<Path>,
        reviews_path: Option<&Path>,
    ) -> Result<Self, BookingError> {
        let packages_json = std::fs::read_to_string(packages_path.as_ref()).map_err(|err| {
            BookingError::Config(format!(
                "failed to read catalog {}: {err}",
                packages_path.as_ref().display()
            ))
        })?;
        let reviews_json = match reviews_path {
            Some(path) => Some(std::fs::read_to_string(path).map_err(|err| {
                BookingError::Config(format!(
                    "failed to read reviews {}: {err}",
                    path.display()
                ))
            })?),
            None => None,
        };
        Self::from_json(&packages_json, reviews_json.as_deref())
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.slug == slug)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Service> {
        self.services
            .iter()
            .find(|service| service.name.eq_ignore_ascii_case(name))
    }
}
