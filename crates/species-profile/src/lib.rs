//! Species profile resolver
//!
//! Resolves a free-text species name into a scientific name, a
//! kingdom / phylum / class classification, one recorded coordinate and a
//! place name, by consulting GBIF, OBIS and Nominatim in a fixed fallback order:
//!
//! 1. GBIF strict name match, then GBIF species search
//! 2. GBIF occurrence search, then OBIS occurrence search
//! 3. Nominatim reverse geocoding of whichever coordinate was found
//!
//! ```no_run
//! use species_profile::{ProfileConfig, ProfileOrchestrator};
//!
//! # async fn example() {
//! let orchestrator = ProfileOrchestrator::new(&ProfileConfig::from_env());
//! if let Some(profile) = orchestrator.build_profile("Tiger Shark").await {
//!     println!("{} lives in {}", profile.scientific_name, profile.location_text());
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod geocoding;
pub mod occurrence;
pub mod profile;
pub mod taxonomy;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::ProfileConfig;
pub use error::{ProfileError, Result};
pub use geocoding::GeocodingResolver;
pub use occurrence::OccurrenceLocator;
pub use profile::ProfileOrchestrator;
pub use taxonomy::TaxonomicMatcher;
pub use types::{Classification, Coordinate, LocationLabel, SpeciesProfile, TaxonKey, TaxonMatch};
