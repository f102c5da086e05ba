//! Geo client configuration.

use std::env;
use std::time::Duration;

/// Public freeipapi.com JSON endpoint
pub const DEFAULT_GEO_API_URL: &str = "https://freeipapi.com/api/json";

/// Default request timeout in milliseconds
pub const DEFAULT_GEO_TIMEOUT_MS: u64 = 10_000;

/// Geo client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoClientConfig {
    /// Base URL; the IP is appended as the last path segment
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for GeoClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEO_API_URL.to_string(),
            timeout_ms: DEFAULT_GEO_TIMEOUT_MS,
        }
    }
}

impl GeoClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("GEO_API_URL").unwrap_or_else(|_| DEFAULT_GEO_API_URL.to_string()),
            timeout_ms: env::var("GEO_TIMEOUT_MS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_GEO_TIMEOUT_MS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
