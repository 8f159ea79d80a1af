//! Free-text name → GBIF taxon, strict match first, broad search second

use gbif_api::{GbifClient, NameMatch, SpeciesSearchResult};
use tracing::{debug, info, warn};

use crate::types::{Classification, TaxonMatch};

const SPECIES_RANK: &str = "SPECIES";

pub struct TaxonomicMatcher {
    gbif: GbifClient,
}

impl TaxonomicMatcher {
    pub fn new(gbif: GbifClient) -> Self {
        Self { gbif }
    }

    /// Resolve a name to a taxon, or `None` when neither strategy finds one.
    ///
    /// A failed strict match only moves on to the broad search. A failed broad
    /// search ends the resolution; nothing is retried.
    pub async fn resolve(&self, name: &str) -> Option<TaxonMatch> {
        match self.strict_match(name).await {
            Ok(Some(taxon)) => {
                info!(
                    name,
                    scientific_name = %taxon.scientific_name,
                    key = %taxon.taxon_key,
                    "Strict match found"
                );
                return Some(taxon);
            }
            Ok(None) => debug!(name, "No strict match"),
            Err(e) => warn!(name, error = %e, "Strict match failed"),
        }

        info!(name, "Falling back to a broader species search");
        match self.broad_search(name).await {
            Ok(Some(taxon)) => {
                info!(
                    name,
                    scientific_name = %taxon.scientific_name,
                    key = %taxon.taxon_key,
                    "Species search match found"
                );
                Some(taxon)
            }
            Ok(None) => {
                info!(name, "Could not find any species match");
                None
            }
            Err(e) => {
                warn!(name, error = %e, "Species search failed");
                None
            }
        }
    }

    async fn strict_match(&self, name: &str) -> gbif_api::Result<Option<TaxonMatch>> {
        let matched = self.gbif.match_name(name).await?;
        Ok(from_name_match(&matched))
    }

    async fn broad_search(&self, name: &str) -> gbif_api::Result<Option<TaxonMatch>> {
        let results = self.gbif.search_species(name, Some(SPECIES_RANK), 1).await?;
        Ok(results.first().and_then(from_search_result))
    }
}

fn from_name_match(m: &NameMatch) -> Option<TaxonMatch> {
    let key = m.matched_key()?;
    let classification =
        Classification::from_ranks(m.kingdom.as_deref(), m.phylum.as_deref(), m.class.as_deref());
    Some(TaxonMatch::new(key, m.scientific_name.as_deref(), classification))
}

fn from_search_result(r: &SpeciesSearchResult) -> Option<TaxonMatch> {
    let key = r.key?;
    let classification =
        Classification::from_ranks(r.kingdom.as_deref(), r.phylum.as_deref(), r.class.as_deref());
    Some(TaxonMatch::new(key, r.scientific_name.as_deref(), classification))
}
