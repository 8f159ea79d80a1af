//! Representative occurrence coordinate for a taxon: GBIF first, OBIS on miss

use gbif_api::GbifClient;
use obis_client::ObisClient;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::types::{Coordinate, TaxonMatch};

pub struct OccurrenceLocator {
    gbif: GbifClient,
    obis: ObisClient,
    page_size: u32,
}

impl OccurrenceLocator {
    pub fn new(gbif: GbifClient, obis: ObisClient, page_size: u32) -> Self {
        Self {
            gbif,
            obis,
            page_size,
        }
    }

    /// Find one located occurrence of the taxon.
    ///
    /// `Ok(None)` means no source knows a located record. A GBIF failure is
    /// returned as `Err` and OBIS is not consulted; an OBIS failure is `Ok(None)`.
    pub async fn locate(&self, taxon: &TaxonMatch) -> Result<Option<Coordinate>> {
        info!(key = %taxon.taxon_key, "Searching GBIF occurrence records");
        let records = self
            .gbif
            .search_occurrences(taxon.taxon_key.get(), self.page_size)
            .await?;

        let scanned = records.len();
        let located = records
            .iter()
            .find_map(|r| Coordinate::from_parts(r.decimal_latitude, r.decimal_longitude));
        if let Some(coordinate) = located {
            debug!(key = %taxon.taxon_key, %coordinate, "GBIF occurrence located");
            return Ok(Some(coordinate));
        }

        info!(
            key = %taxon.taxon_key,
            scanned,
            "No GBIF occurrence with coordinates, falling back to OBIS"
        );
        match self.obis_coordinate(&taxon.scientific_name).await {
            Ok(found) => Ok(found),
            Err(e) => {
                warn!(scientific_name = %taxon.scientific_name, error = %e, "OBIS lookup failed");
                Ok(None)
            }
        }
    }

    async fn obis_coordinate(&self, scientific_name: &str) -> Result<Option<Coordinate>> {
        let records = self.obis.occurrences(scientific_name, 1).await?;
        let found = records
            .first()
            .and_then(|r| Coordinate::from_parts(r.decimal_latitude, r.decimal_longitude));
        match found {
            Some(coordinate) => info!(%coordinate, "Found coordinates on OBIS"),
            None => info!(scientific_name, "No located occurrence on OBIS"),
        }
        Ok(found)
    }
}
