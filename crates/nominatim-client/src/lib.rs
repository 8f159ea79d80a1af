//! Nominatim Reverse Geocoding Client
//!
//! A Rust client for the [Nominatim](https://nominatim.org/) reverse geocoding API.
//! Requests carry a configurable User-Agent as required by the OSM usage policy.

mod client;
mod error;
mod types;

pub use client::NominatimClient;
pub use error::{NominatimError, Result};
pub use types::ReverseGeocode;
