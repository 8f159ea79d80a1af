//! GBIF API HTTP client

use crate::error::{GbifError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for interacting with the GBIF (Global Biodiversity Information Facility) API
///
/// Covers the v1 name-matching, species-search and occurrence-search endpoints.
#[derive(Debug, Clone)]
pub struct GbifClient {
    http: reqwest::Client,
    base_url: String,
}

impl GbifClient {
    /// Base URL for GBIF API v1
    pub const V1_BASE_URL: &'static str = "https://api.gbif.org/v1";

    /// Create a new GBIF client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_base_url(Self::V1_BASE_URL)
    }

    /// Create a new GBIF client against a custom v1 base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a new GBIF client with a custom base URL and timeout
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Match a name against the GBIF backbone taxonomy
    ///
    /// GBIF always answers with a body; a miss is reported as `matchType: NONE`
    /// rather than an HTTP error. Use [`NameMatch::matched_key`] to test for a hit.
    ///
    /// # Arguments
    /// * `name` - Scientific or common name to match
    pub async fn match_name(&self, name: &str) -> Result<NameMatch> {
        let url = format!(
            "{}/species/match?name={}",
            self.base_url,
            urlencoding::encode(name)
        );
        self.get_json(&url).await
    }

    /// Full-text search over name usages
    ///
    /// # Arguments
    /// * `query` - Free-text query matched against scientific and vernacular names
    /// * `rank` - Optional rank filter (e.g., "SPECIES")
    /// * `limit` - Maximum number of results to return
    pub async fn search_species(
        &self,
        query: &str,
        rank: Option<&str>,
        limit: u32,
    ) -> Result<Vec<SpeciesSearchResult>> {
        let mut url = format!(
            "{}/species/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        if let Some(r) = rank {
            url.push_str(&format!("&rank={}", urlencoding::encode(r)));
        }
        url.push_str(&format!("&limit={}", limit));

        let data: ListResponse<SpeciesSearchResult> = self.get_json(&url).await?;
        Ok(data.results)
    }

    /// Search occurrence records of a taxon that carry coordinates
    ///
    /// # Arguments
    /// * `taxon_key` - The GBIF key of the taxon
    /// * `limit` - Maximum number of records to return
    pub async fn search_occurrences(&self, taxon_key: u64, limit: u32) -> Result<Vec<Occurrence>> {
        let url = format!(
            "{}/occurrence/search?taxonKey={}&hasCoordinate=true&limit={}",
            self.base_url, taxon_key, limit
        );

        let data: ListResponse<Occurrence> = self.get_json(&url).await?;
        Ok(data.results)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GBIF request");
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(GbifError::Status(response.status()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for GbifClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = GbifClient::with_base_url("http://localhost:9000/v1/");
        assert_eq!(client.base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn test_default_points_at_v1() {
        assert_eq!(GbifClient::default().base_url(), GbifClient::V1_BASE_URL);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = GbifClient::with_base_url_and_timeout(
            "http://127.0.0.1:1/v1",
            Duration::from_secs(2),
        );
        let err = client.match_name("Puma concolor").await.unwrap_err();
        assert!(matches!(err, GbifError::Http(_)));
    }
}
