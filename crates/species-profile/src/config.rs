use std::env;

pub const DEFAULT_GBIF_URL: &str = "https://api.gbif.org/v1";
pub const DEFAULT_OBIS_URL: &str = "https://api.obis.org/v3";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
/// Client identifier required by the Nominatim usage policy
pub const DEFAULT_USER_AGENT: &str = "SpeciesProfileFinder/1.0";

/// Upper bound on GBIF occurrence records scanned per query
pub const MAX_OCCURRENCE_LIMIT: u32 = 50;
/// Country/ocean granularity
pub const DEFAULT_GEOCODE_ZOOM: u8 = 3;

/// Provider endpoints and request parameters, fixed for the lifetime of a resolver
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub gbif_base_url: String,
    pub obis_base_url: String,
    pub nominatim_base_url: String,
    pub user_agent: String,
    pub occurrence_limit: u32,
    pub geocode_zoom: u8,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            gbif_base_url: DEFAULT_GBIF_URL.to_string(),
            obis_base_url: DEFAULT_OBIS_URL.to_string(),
            nominatim_base_url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            occurrence_limit: MAX_OCCURRENCE_LIMIT,
            geocode_zoom: DEFAULT_GEOCODE_ZOOM,
        }
    }
}

impl ProfileConfig {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            gbif_base_url: var("GBIF_API_URL", defaults.gbif_base_url),
            obis_base_url: var("OBIS_API_URL", defaults.obis_base_url),
            nominatim_base_url: var("NOMINATIM_URL", defaults.nominatim_base_url),
            user_agent: var("NOMINATIM_USER_AGENT", defaults.user_agent),
            occurrence_limit: defaults.occurrence_limit,
            geocode_zoom: defaults.geocode_zoom,
        }
    }

    /// Occurrence page size, never above [`MAX_OCCURRENCE_LIMIT`]
    pub fn occurrence_page_size(&self) -> u32 {
        self.occurrence_limit.clamp(1, MAX_OCCURRENCE_LIMIT)
    }
}
