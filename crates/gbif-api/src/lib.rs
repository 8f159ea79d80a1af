//! Rust client for the GBIF (Global Biodiversity Information Facility) API
//!
//! This crate provides type-safe bindings to the parts of the GBIF v1 API used
//! to identify a species and find where it has been recorded.
//!
//! # Example
//!
//! ```no_run
//! use gbif_api::GbifClient;
//!
//! # async fn example() -> Result<(), gbif_api::GbifError> {
//! let client = GbifClient::new();
//!
//! let matched = client.match_name("Carcharodon carcharias").await?;
//! if let Some(key) = matched.matched_key() {
//!     for occurrence in client.search_occurrences(key, 50).await? {
//!         println!("{:?} {:?}", occurrence.decimal_latitude, occurrence.decimal_longitude);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /species/match` - Match a name to the backbone taxonomy
//! - `GET /species/search` - Full-text name usage search
//! - `GET /occurrence/search` - Occurrence records with coordinates

mod client;
mod error;
mod types;

pub use client::GbifClient;
pub use error::{GbifError, Result};
pub use types::{ListResponse, NameMatch, Occurrence, SpeciesSearchResult, MATCH_TYPE_NONE};
