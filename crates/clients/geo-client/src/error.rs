//! Errors returned by the geolocation client.

use thiserror::Error;

/// Boxed transport-level cause, kept intact for the caller.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum GeoError {
    /// Input is not an IPv4 or IPv6 address; no request was made
    #[error("'{0}' does not appear to be an IPv4 or IPv6 address")]
    InvalidAddress(String),

    /// Connection, TLS or timeout failure reported by the transport
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// Server answered with an error status
    #[error("HTTP {status} for url {url}")]
    Status { status: u16, url: String },

    /// Body was not the expected JSON object
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GeoError {
    /// Wrap any transport error
    pub fn transport(err: impl Into<BoxError>) -> Self {
        GeoError::Transport(err.into())
    }

    /// Failures that come from the network or the remote server.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, GeoError::Transport(_) | GeoError::Status { .. })
    }

    /// Get error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            GeoError::InvalidAddress(_) => "INVALID_ADDRESS",
            GeoError::Transport(_) => "TRANSPORT_ERROR",
            GeoError::Status { .. } => "HTTP_ERROR",
            GeoError::Decode(_) => "DECODE_ERROR",
        }
    }
}

/// Result type alias
pub type GeoResult<T> = Result<T, GeoError>;
