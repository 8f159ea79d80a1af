use std::time::Duration;

use tracing::{debug, warn};

use crate::error::NominatimError;
use crate::types::{NominatimResponse, ReverseGeocode};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_USER_AGENT: &str = "nominatim-client-rs/0.1";

/// Nominatim reverse geocoding client
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new client with default settings
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom Nominatim URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_user_agent(base_url, DEFAULT_USER_AGENT)
    }

    /// Create a new client with a custom Nominatim URL and user agent
    pub fn with_base_url_and_user_agent(base_url: &str, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reverse geocode coordinates at the given zoom level
    ///
    /// Zoom 3 resolves to country granularity; 18 to building granularity.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
        zoom: u8,
    ) -> crate::Result<ReverseGeocode> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(NominatimError::InvalidCoordinates(latitude, longitude));
        }

        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom={}",
            self.base_url, latitude, longitude, zoom
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(NominatimError::Http)?;

        if !response.status().is_success() {
            return Err(NominatimError::ApiError(format!(
                "Nominatim returned status {}",
                response.status()
            )));
        }

        let body = response.bytes().await.map_err(NominatimError::Http)?;
        let data: NominatimResponse = serde_json::from_slice(&body)?;

        if let Some(ref err) = data.error {
            warn!(lat = latitude, lon = longitude, error = %err, "Nominatim returned error");
        }

        let result = ReverseGeocode::from(data);

        debug!(
            lat = latitude,
            lon = longitude,
            country = result.country.as_deref().unwrap_or("unknown"),
            "Geocoded coordinates"
        );

        Ok(result)
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}
