//! IP geolocation client.
//!
//! Validates the address locally, issues one `GET {base_url}/{ip}` and maps
//! `countryName`, `regionName` and `cityName` out of the JSON body.
//!
//! ```rust,ignore
//! use geo_client::{GeoClient, GeoClientConfig};
//!
//! let client = GeoClient::from_config(&GeoClientConfig::default())?;
//! let location = client.get_location("8.8.8.8").await?;
//! println!("{}, {}", location.city, location.country);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod transport;

pub use client::GeoClient;
pub use config::{GeoClientConfig, DEFAULT_GEO_API_URL, DEFAULT_GEO_TIMEOUT_MS};
pub use error::{GeoError, GeoResult};
pub use location::Location;
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockHttpTransport;
