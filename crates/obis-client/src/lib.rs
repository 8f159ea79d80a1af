//! Rust client for the OBIS (Ocean Biodiversity Information System) API
//!
//! Only the v3 occurrence search is covered; OBIS is consulted by scientific
//! name for marine taxa that GBIF has no located records for.
//!
//! ```no_run
//! # async fn example() -> Result<(), obis_client::ObisError> {
//! let client = obis_client::ObisClient::new();
//! let records = client.occurrences("Carcharodon carcharias", 1).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::ObisClient;
pub use error::{ObisError, Result};
pub use types::{ObisOccurrence, OccurrenceResponse};
