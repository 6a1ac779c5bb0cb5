pub mod models;

pub use models::{AppConfig, CalcomConfig, CatalogConfig, ServerConfig};

use config::{Config, ConfigError, Environment, File};
use std::sync::Once;

static DOTENV: Once = Once::new();

/// Loads `.env` exactly once per process so env-only secrets (e.g. the
/// Cal.com API key) are available before any config read.
pub fn ensure_dotenv_loaded() {
    DOTENV.call_once(|| {
        dotenv::dotenv().ok();
    });
}

/// Loads the application configuration.
///
/// Sources, later entries overriding earlier ones:
/// 1. `config/default.*` (optional)
/// 2. `config/{RUN_ENV}.*` (optional, RUN_ENV defaults to "development")
/// 3. Environment variables with the `APP` prefix and `__` separator,
///    e.g. `APP_CALCOM__API_KEY`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}
