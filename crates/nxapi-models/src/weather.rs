//! Weather reports: METAR, TAF and ATIS.
//!
//! All three are fetched per airport and may name an upstream `source`
//! (e.g. `"vatsim"`, `"ms"`, `"pilotedge"`). When no source is given the
//! server picks its default.

use serde::{Deserialize, Serialize};

/// A current weather observation (`GET /metar/{icao}`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetarResponse {
    /// Airport the report was issued for.
    pub icao: String,
    /// Upstream provider that produced the report.
    pub source: String,
    /// Raw METAR text.
    pub metar: String,
}

/// A terminal aerodrome forecast (`GET /taf/{icao}`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TafResponse {
    /// Airport the forecast was issued for.
    pub icao: String,
    /// Upstream provider that produced the forecast.
    pub source: String,
    /// Raw TAF text.
    pub taf: String,
}

/// An automated terminal information broadcast (`GET /atis/{icao}`).
///
/// Airports publish either one combined ATIS or separate arrival and
/// departure broadcasts, so every text field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AtisResponse {
    /// Airport the broadcast belongs to.
    pub icao: String,
    /// Upstream provider that produced the broadcast.
    pub source: String,
    /// Combined arrival/departure ATIS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined: Option<String>,
    /// Arrival ATIS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr: Option<String>,
    /// Departure ATIS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep: Option<String>,
}

impl AtisResponse {
    /// Whether the airport broadcasts separate arrival/departure ATIS.
    pub fn is_split(&self) -> bool {
        self.combined.is_none() && (self.arr.is_some() || self.dep.is_some())
    }
}
