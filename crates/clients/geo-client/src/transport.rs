//! HTTP transport used by [`GeoClient`](crate::GeoClient).

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{GeoError, GeoResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Raw HTTP response: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 4xx and 5xx count as failures, matching `raise_for_status` semantics.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Issues a single GET request.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> GeoResult<TransportResponse>;
}

/// `reqwest`-backed transport with a per-request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> GeoResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GeoError::transport)?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy, TLS and timeout settings are kept).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> GeoResult<TransportResponse> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(GeoError::transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(GeoError::transport)?;
        debug!(status, bytes = body.len(), "Response received");

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert!(!TransportResponse::new(200, "{}").is_error());
        assert!(!TransportResponse::new(304, "").is_error());
        assert!(TransportResponse::new(404, "").is_error());
        assert!(TransportResponse::new(503, "").is_error());
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new(Duration::from_secs(1)).is_ok());
    }
}
