//! Error types for species profile resolution

use std::fmt;

#[derive(Debug)]
pub enum ProfileError {
    /// GBIF request failed or answered garbage
    Gbif(gbif_api::GbifError),
    /// OBIS request failed or answered garbage
    Obis(obis_client::ObisError),
    /// Nominatim request failed or answered garbage
    Geocoding(nominatim_client::NominatimError),
    Json(serde_json::Error),
    Io(std::io::Error),
    Config(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gbif(e) => write!(f, "{}", e),
            Self::Obis(e) => write!(f, "{}", e),
            Self::Geocoding(e) => write!(f, "Geocoding error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gbif(e) => Some(e),
            Self::Obis(e) => Some(e),
            Self::Geocoding(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<gbif_api::GbifError> for ProfileError {
    fn from(e: gbif_api::GbifError) -> Self {
        Self::Gbif(e)
    }
}

impl From<obis_client::ObisError> for ProfileError {
    fn from(e: obis_client::ObisError) -> Self {
        Self::Obis(e)
    }
}

impl From<nominatim_client::NominatimError> for ProfileError {
    fn from(e: nominatim_client::NominatimError) -> Self {
        Self::Geocoding(e)
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for ProfileError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for ProfileError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
