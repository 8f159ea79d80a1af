//! Query-scoped values produced while resolving a species profile

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use std::fmt;

/// Label used when GBIF returned a record without a scientific name
pub const UNKNOWN_SCIENTIFIC_NAME: &str = "N/A";
/// Location text of a profile for which no coordinate was found
pub const NO_LOCATION: &str = "No location available";
/// Coordinates text of a profile for which no coordinate was found
pub const NO_COORDINATES: &str = "No coordinates found";

/// Opaque GBIF taxon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaxonKey(u64);

impl TaxonKey {
    pub fn new(key: u64) -> Self {
        Self(key)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaxonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kingdom / phylum / class descriptor; missing ranks are empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub kingdom: String,
    pub phylum: String,
    pub class: String,
}

impl Classification {
    pub fn from_ranks(kingdom: Option<&str>, phylum: Option<&str>, class: Option<&str>) -> Self {
        Self {
            kingdom: kingdom.unwrap_or_default().to_string(),
            phylum: phylum.unwrap_or_default().to_string(),
            class: class.unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.kingdom, self.phylum, self.class)
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A resolved taxon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonMatch {
    pub scientific_name: String,
    pub taxon_key: TaxonKey,
    pub classification: Classification,
}

impl TaxonMatch {
    pub fn new(taxon_key: u64, scientific_name: Option<&str>, classification: Classification) -> Self {
        let scientific_name = scientific_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNKNOWN_SCIENTIFIC_NAME)
            .to_string();
        Self {
            scientific_name,
            taxon_key: TaxonKey::new(taxon_key),
            classification,
        }
    }
}

/// A WGS84 point. Only constructible with both halves present and in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Build from optional record fields; `None` unless both are usable
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        Self::new(latitude?, longitude?)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.latitude)?;
        pair.serialize_element(&self.longitude)?;
        pair.end()
    }
}

/// Place name for a coordinate, or why there isn't one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationLabel {
    Country(String),
    Ocean(String),
    DisplayName(String),
    /// The geocoder answered but named nothing usable
    NotFound,
    /// The geocoder could not be reached or answered garbage
    Unavailable,
}

impl LocationLabel {
    /// True for the two sentinel outcomes
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::NotFound | Self::Unavailable)
    }
}

impl fmt::Display for LocationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country(name) | Self::Ocean(name) | Self::DisplayName(name) => f.write_str(name),
            Self::NotFound => f.write_str("Detailed location not found"),
            Self::Unavailable => f.write_str("Could not fetch location data"),
        }
    }
}

impl Serialize for LocationLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The terminal output of a resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesProfile {
    pub scientific_name: String,
    pub classification: Classification,
    pub coordinate: Option<Coordinate>,
    #[serde(serialize_with = "serialize_location")]
    pub location: Option<LocationLabel>,
}

impl SpeciesProfile {
    pub fn coordinate_text(&self) -> String {
        match &self.coordinate {
            Some(c) => c.to_string(),
            None => NO_COORDINATES.to_string(),
        }
    }

    pub fn location_text(&self) -> String {
        match &self.location {
            Some(label) => label.to_string(),
            None => NO_LOCATION.to_string(),
        }
    }
}

fn serialize_location<S: Serializer>(
    location: &Option<LocationLabel>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match location {
        Some(label) => serializer.collect_str(label),
        None => serializer.serialize_str(NO_LOCATION),
    }
}
