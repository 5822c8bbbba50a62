//! Airport chart listings.

use serde::{Deserialize, Serialize};

/// One published chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chart {
    /// Download location.
    pub url: String,
    /// Chart title.
    pub name: String,
}

/// All charts known for an airport (`GET /api/v1/charts/{icao}`).
///
/// `charts` is absent when the server has nothing for the airport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartsResponse {
    /// Airport the charts belong to.
    pub icao: String,
    /// Available charts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charts: Option<Vec<Chart>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charts_optional() {
        let empty: ChartsResponse = serde_json::from_str(r#"{"icao":"XXXX"}"#).unwrap();
        assert!(empty.charts.is_none());

        let json = r#"{"icao":"EDDF","charts":[{"url":"https://c/1.pdf","name":"ILS 25L"}]}"#;
        let full: ChartsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(full.charts.unwrap()[0].name, "ILS 25L");
    }
}
