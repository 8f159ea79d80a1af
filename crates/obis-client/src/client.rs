use std::time::Duration;

use tracing::debug;

use crate::error::{ObisError, Result};
use crate::types::{ObisOccurrence, OccurrenceResponse};

const DEFAULT_BASE_URL: &str = "https://api.obis.org/v3";

/// OBIS v3 API client
#[derive(Debug, Clone)]
pub struct ObisClient {
    http: reqwest::Client,
    base_url: String,
}

impl ObisClient {
    /// Create a new client with default settings
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom OBIS v3 base URL
    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Occurrence records for a scientific name, in OBIS's own order
    pub async fn occurrences(&self, scientific_name: &str, size: u32) -> Result<Vec<ObisOccurrence>> {
        let url = format!(
            "{}/occurrence?scientificname={}&size={}",
            self.base_url,
            urlencoding::encode(scientific_name),
            size
        );
        debug!(url = %url, "OBIS request");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ObisError::Status(response.status()));
        }

        let body = response.bytes().await?;
        let data: OccurrenceResponse = serde_json::from_slice(&body)?;
        Ok(data.results)
    }
}

impl Default for ObisClient {
    fn default() -> Self {
        Self::new()
    }
}
