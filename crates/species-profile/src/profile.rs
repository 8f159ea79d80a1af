//! Name → taxon → occurrence → place, assembled into a [`SpeciesProfile`]

use gbif_api::GbifClient;
use nominatim_client::NominatimClient;
use obis_client::ObisClient;
use tracing::{info, warn};

use crate::config::ProfileConfig;
use crate::geocoding::GeocodingResolver;
use crate::occurrence::OccurrenceLocator;
use crate::taxonomy::TaxonomicMatcher;
use crate::types::SpeciesProfile;

/// Runs one resolution per call; holds no per-query state
pub struct ProfileOrchestrator {
    matcher: TaxonomicMatcher,
    locator: OccurrenceLocator,
    geocoder: GeocodingResolver,
}

impl ProfileOrchestrator {
    pub fn new(config: &ProfileConfig) -> Self {
        let gbif = GbifClient::with_base_url(&config.gbif_base_url);
        let obis = ObisClient::with_base_url(&config.obis_base_url);
        let nominatim = NominatimClient::with_base_url_and_user_agent(
            &config.nominatim_base_url,
            &config.user_agent,
        );

        Self {
            matcher: TaxonomicMatcher::new(gbif.clone()),
            locator: OccurrenceLocator::new(gbif, obis, config.occurrence_page_size()),
            geocoder: GeocodingResolver::new(nominatim, config.geocode_zoom),
        }
    }

    /// Build a profile, or `None` if the name could not be resolved to a taxon
    /// or GBIF's occurrence search failed.
    ///
    /// Coordinate and location are absent together when no source knows a
    /// located occurrence; geocoding is then not attempted.
    pub async fn build_profile(&self, name: &str) -> Option<SpeciesProfile> {
        info!(name, "Starting profile search");

        let taxon = self.matcher.resolve(name).await?;

        let coordinate = match self.locator.locate(&taxon).await {
            Ok(coordinate) => coordinate,
            Err(e) => {
                warn!(name, key = %taxon.taxon_key, error = %e, "Error fetching occurrence data");
                return None;
            }
        };

        let location = match coordinate {
            Some(c) => Some(self.geocoder.reverse_geocode(c).await),
            None => None,
        };

        Some(SpeciesProfile {
            scientific_name: taxon.scientific_name,
            classification: taxon.classification,
            coordinate,
            location,
        })
    }
}
