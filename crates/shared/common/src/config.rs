//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use geo_client::GeoClientConfig;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tracing filter directive
    pub log_filter: String,
    /// File receiving account transaction lines, if any
    pub transaction_log_file: Option<PathBuf>,
    /// Geolocation client settings
    pub geo: GeoClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            transaction_log_file: None,
            geo: GeoClientConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            transaction_log_file: env::var("TRANSACTION_LOG_FILE")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            geo: GeoClientConfig::from_env(),
        }
    }
}
