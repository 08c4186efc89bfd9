//! Inbound request types for the analysis endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A geospatial analysis request. Every field is optional on the wire; absent
/// fields get the same defaults the service has always used (empty query,
/// 0/0 coordinates, `general` analysis type).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub query: String,

    /// Raw satellite payload, forwarded to the model untouched.
    #[serde(default)]
    pub satellite_data: serde_json::Value,

    #[serde(default)]
    #[validate(nested)]
    pub coordinates: Coordinates,

    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

fn default_analysis_type() -> String {
    "general".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinates {
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.query, "");
        assert_eq!(request.analysis_type, "general");
        assert_eq!(request.coordinates, Coordinates { lat: 0.0, lng: 0.0 });
        assert!(request.satellite_data.is_null());
    }

    #[test]
    fn out_of_range_latitude_fails_validation() {
        let request: AnalyzeRequest =
            serde_json::from_value(serde_json::json!({
                "query": "flood risk",
                "coordinates": { "lat": 120.0, "lng": 77.1 }
            }))
            .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn valid_coordinates_pass_validation() {
        let request: AnalyzeRequest =
            serde_json::from_value(serde_json::json!({
                "coordinates": { "lat": -33.86, "lng": 151.21 }
            }))
            .unwrap();

        assert!(request.validate().is_ok());
    }
}
