//! Data types for GBIF API responses
//!
//! These structs mirror the GBIF v1 API responses. Only the fields consumed
//! downstream are modelled; unknown fields are ignored.

use serde::Deserialize;

/// Match type reported by `/species/match` when nothing matched
pub const MATCH_TYPE_NONE: &str = "NONE";

/// Result from GBIF v1 `/species/match` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMatch {
    /// EXACT, FUZZY, HIGHERRANK or NONE
    pub match_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_key")]
    pub usage_key: Option<u64>,
    pub scientific_name: Option<String>,
    pub canonical_name: Option<String>,
    pub rank: Option<String>,
    pub confidence: Option<u32>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class: Option<String>,
}

impl NameMatch {
    /// The usage key, if GBIF reported a match at all
    pub fn matched_key(&self) -> Option<u64> {
        if self.match_type.as_deref() == Some(MATCH_TYPE_NONE) {
            return None;
        }
        self.usage_key
    }
}

/// Result from GBIF v1 `/species/search` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesSearchResult {
    #[serde(default, deserialize_with = "deserialize_key")]
    pub key: Option<u64>,
    pub scientific_name: Option<String>,
    pub canonical_name: Option<String>,
    pub rank: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class: Option<String>,
}

/// Occurrence record from GBIF v1 `/occurrence/search` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub key: Option<u64>,
    pub scientific_name: Option<String>,
    pub decimal_latitude: Option<f64>,
    pub decimal_longitude: Option<f64>,
    pub country: Option<String>,
}

/// Generic paginated list response from GBIF API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub count: Option<u64>,
    pub end_of_records: Option<bool>,
}

/// Helper to deserialize key that can be either string or number
fn deserialize_key<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct KeyVisitor;

    impl<'de> Visitor<'de> for KeyVisitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or integer representing a key")
        }

        fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(v).map(Some).map_err(de::Error::custom)
        }

        fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse::<u64>().map(Some).map_err(de::Error::custom)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(KeyVisitor)
}
