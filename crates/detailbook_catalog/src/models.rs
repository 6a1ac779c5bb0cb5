// --- File: crates/detailbook_catalog/src/models.rs ---
use serde::{Deserialize, Serialize};

/// Optional extra sold on top of a package.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Addon {
    pub name: String,
    /// Price in whole currency units, as published on the site.
    pub price: i64,
}

/// One entry of the `packages` array in the catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    /// Stable event-type identifier. Derived from the name when absent.
    #[serde(default)]
    pub slug: Option<String>,
    pub price: i64,
    /// Display label like "45 mins" or "3-4 hours".
    #[serde(default)]
    pub duration: Option<String>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub addons: Vec<Addon>,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub cta_href: Option<String>,
    #[serde(default)]
    pub price_label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDocument {
    pub packages: Vec<Package>,
}

/// One customer review from the reviews feed.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub stars: u8,
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsDocument {
    pub reviews: Vec<Review>,
}

/// A bookable offering. Immutable once loaded from the catalog.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub name: String,
    /// Stable machine-readable identifier, distinct from the display name;
    /// doubles as the scheduling API's event-type slug.
    pub slug: String,
    pub price: i64,
    pub duration: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    pub addons: Vec<Addon>,
}

impl From<Package> for Service {
    fn from(package: Package) -> Self {
        let slug = package
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&package.name));
        Service {
            name: package.name,
            slug,
            price: package.price,
            duration: package.duration,
            description: package.description,
            features: package.features,
            addons: package.addons,
        }
    }
}

/// Derives a slug from a display name: "Express Wash" -> "express-wash".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
