//! Airport lookups.

use serde::{Deserialize, Serialize};

/// Static information about a single airport (`GET /api/v1/airport/{icao}`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AirportResponse {
    /// Four-letter ICAO designator.
    pub icao: String,
    /// Three-letter IATA designator (may be empty).
    pub iata: String,
    /// Facility class, e.g. `"large_airport"`.
    #[serde(rename = "type")]
    pub airport_type: String,
    /// Human readable name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Field elevation in feet.
    pub elevation: f64,
    /// Continent code, e.g. `"EU"`.
    pub continent: String,
    /// ISO country code.
    pub country: String,
    /// Transition altitude in feet.
    pub trans_alt: f64,
}

/// Body of `POST /api/v1/airport/_batch`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AirportBatchRequest {
    /// Airports to resolve.
    pub icaos: Vec<String>,
}
