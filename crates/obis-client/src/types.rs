use serde::Deserialize;

/// Response envelope of `/occurrence`
#[derive(Debug, Clone, Deserialize)]
pub struct OccurrenceResponse {
    pub total: Option<u64>,
    #[serde(default)]
    pub results: Vec<ObisOccurrence>,
}

/// A single OBIS occurrence record (Darwin Core field names)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObisOccurrence {
    pub id: Option<String>,
    pub scientific_name: Option<String>,
    pub decimal_latitude: Option<f64>,
    pub decimal_longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_response_deserializes() {
        let json = r#"{
            "total": 31876,
            "results": [{
                "id": "00003a5e-7f1b-4b4a-9d4f-1c2b3a4d5e6f",
                "scientificName": "Carcharodon carcharias",
                "decimalLatitude": -34.62,
                "decimalLongitude": 19.35,
                "basisOfRecord": "HumanObservation"
            }]
        }"#;
        let data: OccurrenceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.total, Some(31876));
        assert_eq!(data.results[0].decimal_latitude, Some(-34.62));
        assert_eq!(data.results[0].decimal_longitude, Some(19.35));
    }

    #[test]
    fn test_missing_results_is_empty() {
        let data: OccurrenceResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(data.results.is_empty());
    }
}
