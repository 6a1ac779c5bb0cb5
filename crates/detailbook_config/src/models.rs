// --- File: crates/detailbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8086
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

// --- Cal.com Config ---
// Holds non-secret Cal.com config. The API key is loaded via the
// APP_CALCOM__API_KEY env var (or .env in development) and must never be
// shipped to the browser client.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalcomConfig {
    /// Cal.com account username the event types live under.
    pub username: String,
    /// Override for the API base URL. Defaults to the public v2 endpoint.
    pub base_url: Option<String>,
    /// `cal-api-version` header value.
    pub api_version: Option<String>,
    /// Secret API key. Env-only; present in the relay process, absent in
    /// any client-side configuration.
    pub api_key: Option<String>,
    /// IANA name of the venue time zone; calendar days and display strings
    /// are interpreted in this zone.
    pub time_zone: Option<String>,
    /// Attendee language sent with bookings.
    pub language: Option<String>,
}

// --- Catalog Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogConfig {
    pub packages_path: Option<String>,
    pub reviews_path: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_calcom: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub calcom: Option<CalcomConfig>,
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
}
