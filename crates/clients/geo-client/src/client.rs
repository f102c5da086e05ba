//! IP geolocation lookups.

use std::net::IpAddr;
use std::sync::Arc;

use tracing::debug;

use crate::config::GeoClientConfig;
use crate::error::{GeoError, GeoResult};
use crate::location::{FreeIpApiResponse, Location};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Looks up the location of an IP address with one GET per call.
///
/// No retries or caching; wrap the client if resilience is needed.
#[derive(Clone)]
pub struct GeoClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl GeoClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    /// Build a client with a [`ReqwestTransport`] honouring the configured timeout.
    pub fn from_config(config: &GeoClientConfig) -> GeoResult<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::new(config.base_url.clone(), Arc::new(transport)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `ip` to country, region and city.
    ///
    /// # Errors
    /// - `InvalidAddress` if `ip` is not IPv4/IPv6 (checked before any request)
    /// - `Transport` / `Status` for network or HTTP failures
    /// - `Decode` if the body lacks the expected fields
    pub async fn get_location(&self, ip: &str) -> GeoResult<Location> {
        ip.parse::<IpAddr>()
            .map_err(|_| GeoError::InvalidAddress(ip.to_string()))?;

        let url = format!("{}/{}", self.base_url, ip);
        let response = self.transport.get(&url).await?;

        if response.is_error() {
            debug!(status = response.status, %url, "Geo lookup failed");
            return Err(GeoError::Status {
                status: response.status,
                url,
            });
        }

        let body: FreeIpApiResponse = serde_json::from_str(&response.body)?;
        Ok(body.into())
    }
}

impl std::fmt::Debug for GeoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockHttpTransport, TransportResponse};

    const MIAMI: &str = r#"{"countryName":"USA","cityName":"MIAMI","regionName":"FLORIDA"}"#;

    fn client(transport: MockHttpTransport) -> GeoClient {
        GeoClient::new("https://geo.test/api/json/", Arc::new(transport))
    }

    #[tokio::test]
    async fn test_get_location_returns_expected_data() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|url: &str| url == "https://geo.test/api/json/8.8.8.8")
            .times(1)
            .returning(|_| Ok(TransportResponse::new(200, MIAMI)));

        let location = client(transport).get_location("8.8.8.8").await.unwrap();

        assert_eq!(
            location,
            Location {
                country: "USA".to_string(),
                region: "FLORIDA".to_string(),
                city: "MIAMI".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_ipv6_address_accepted() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .withf(|url: &str| url.ends_with("/2001:4860:4860::8888"))
            .times(1)
            .returning(|_| Ok(TransportResponse::new(200, MIAMI)));

        assert!(client(transport)
            .get_location("2001:4860:4860::8888")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_invalid_ip_makes_no_request() {
        // No expectations: any call to the transport panics.
        let transport = MockHttpTransport::new();

        let err = client(transport)
            .get_location("invalid_ip_address")
            .await
            .unwrap_err();

        assert!(matches!(err, GeoError::InvalidAddress(ref ip) if ip == "invalid_ip_address"));
        assert!(!err.is_transport_failure());
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(TransportResponse::new(503, "Service Unavailable")));

        let err = client(transport).get_location("8.8.8.8").await.unwrap_err();

        assert!(matches!(err, GeoError::Status { status: 503, .. }));
        assert!(err.is_transport_failure());
    }

    #[tokio::test]
    async fn test_transport_error_then_success() {
        let mut transport = MockHttpTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(GeoError::transport("Service Unavailable")));
        transport
            .expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(TransportResponse::new(200, MIAMI)));

        let client = client(transport);

        let err = client.get_location("8.8.8.8").await.unwrap_err();
        assert!(matches!(err, GeoError::Transport(_)));
        assert_eq!(err.to_string(), "Transport error: Service Unavailable");

        let location = client.get_location("8.8.8.8").await.unwrap();
        assert_eq!(location.city, "MIAMI");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(TransportResponse::new(200, r#"{"countryName":"USA"}"#)));

        let err = client(transport).get_location("1.1.1.1").await.unwrap_err();

        assert!(matches!(err, GeoError::Decode(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = client(MockHttpTransport::new());
        assert_eq!(client.base_url(), "https://geo.test/api/json");
    }
}
