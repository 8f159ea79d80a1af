use nominatim_client::{NominatimClient, ReverseGeocode};
use tracing::{debug, warn};

use crate::types::{Coordinate, LocationLabel};

/// Coordinate → place label via Nominatim. Never fails; failures become sentinels.
pub struct GeocodingResolver {
    nominatim: NominatimClient,
    zoom: u8,
}

impl GeocodingResolver {
    pub fn new(nominatim: NominatimClient, zoom: u8) -> Self {
        Self { nominatim, zoom }
    }

    pub async fn reverse_geocode(&self, coordinate: Coordinate) -> LocationLabel {
        debug!(%coordinate, zoom = self.zoom, "Finding location for coordinates");
        match self
            .nominatim
            .reverse_geocode(coordinate.latitude(), coordinate.longitude(), self.zoom)
            .await
        {
            Ok(place) => label_for(place),
            Err(e) => {
                warn!(%coordinate, error = %e, "Reverse geocoding failed");
                LocationLabel::Unavailable
            }
        }
    }
}

/// Country, then ocean, then display name
fn label_for(place: ReverseGeocode) -> LocationLabel {
    if let Some(country) = place.country {
        LocationLabel::Country(country)
    } else if let Some(ocean) = place.ocean {
        LocationLabel::Ocean(ocean)
    } else if let Some(name) = place.display_name {
        LocationLabel::DisplayName(name)
    } else {
        LocationLabel::NotFound
    }
}
