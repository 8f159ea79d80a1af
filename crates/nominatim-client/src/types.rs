use serde::Deserialize;

/// Place fields returned by a reverse lookup
///
/// Empty strings from the API are normalised to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReverseGeocode {
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub ocean: Option<String>,
    pub display_name: Option<String>,
    /// Nominatim's own error message, e.g. "Unable to geocode" for open water
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NominatimResponse {
    #[serde(default)]
    pub(crate) address: NominatimAddress,
    pub(crate) display_name: Option<String>,
    pub(crate) error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NominatimAddress {
    pub(crate) country: Option<String>,
    pub(crate) country_code: Option<String>,
    pub(crate) ocean: Option<String>,
}

impl From<NominatimResponse> for ReverseGeocode {
    fn from(data: NominatimResponse) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Self {
            country: non_empty(data.address.country),
            country_code: non_empty(data.address.country_code).map(|cc| cc.to_uppercase()),
            ocean: non_empty(data.address.ocean),
            display_name: non_empty(data.display_name),
            error: data.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_response() {
        let json = r#"{
            "place_id": 258297568,
            "display_name": "South Africa",
            "address": {"country": "South Africa", "country_code": "za"}
        }"#;
        let data: NominatimResponse = serde_json::from_str(json).unwrap();
        let place = ReverseGeocode::from(data);
        assert_eq!(place.country.as_deref(), Some("South Africa"));
        assert_eq!(place.country_code.as_deref(), Some("ZA"));
        assert!(place.ocean.is_none());
    }

    #[test]
    fn test_error_response_without_address() {
        let data: NominatimResponse =
            serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        let place = ReverseGeocode::from(data);
        assert_eq!(place.error.as_deref(), Some("Unable to geocode"));
        assert!(place.country.is_none());
        assert!(place.display_name.is_none());
    }

    #[test]
    fn test_blank_fields_are_dropped() {
        let json = r#"{"display_name": "", "address": {"country": " ", "ocean": "Indian Ocean"}}"#;
        let data: NominatimResponse = serde_json::from_str(json).unwrap();
        let place = ReverseGeocode::from(data);
        assert!(place.country.is_none());
        assert!(place.display_name.is_none());
        assert_eq!(place.ocean.as_deref(), Some("Indian Ocean"));
    }
}
