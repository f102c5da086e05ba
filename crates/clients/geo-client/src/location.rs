//! Location returned to callers and the upstream payload it is mapped from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub region: String,
    pub city: String,
}

/// Subset of the freeipapi.com JSON body. Other fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FreeIpApiResponse {
    pub country_name: String,
    pub region_name: String,
    pub city_name: String,
}

impl From<FreeIpApiResponse> for Location {
    fn from(body: FreeIpApiResponse) -> Self {
        Self {
            country: body.country_name,
            region: body.region_name,
            city: body.city_name,
        }
    }
}
