//! Locate command - IP geolocation lookup.

use common::{AppConfig, AppError, AppResult};
use geo_client::GeoClient;

use crate::args::LocateArgs;

/// Execute the locate command
pub async fn execute(args: LocateArgs, config: &AppConfig) -> AppResult<()> {
    let mut geo = config.geo.clone();
    if let Some(base_url) = args.base_url {
        geo.base_url = base_url;
    }

    let client = GeoClient::from_config(&geo)?;
    tracing::info!("Looking up {} via {}", args.ip, client.base_url());

    let location = client.get_location(&args.ip).await?;
    let json = serde_json::to_string_pretty(&location)
        .map_err(|e| AppError::internal(format!("Failed to render location: {}", e)))?;
    println!("{}", json);

    Ok(())
}
