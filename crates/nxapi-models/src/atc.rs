//! Online air traffic controllers and pilots, as reported by a flight
//! simulation network (`vatsim`, `ivao`, ...).

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// AtcType
// ---------------------------------------------------------------------------

/// Facility type of an online controller.
///
/// Encoded on the wire as its integer discriminant.
///
/// # Examples
///
/// ```
/// use nxapi_models::AtcType;
///
/// let t: AtcType = serde_json::from_str("3").unwrap();
/// assert_eq!(t, AtcType::Tower);
/// assert_eq!(t.to_string(), "tower");
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "lowercase")]
pub enum AtcType {
    /// Unclassified position.
    Unknown = 0,
    /// Clearance delivery.
    Delivery = 1,
    /// Ground.
    Ground = 2,
    /// Tower.
    Tower = 3,
    /// Departure.
    Departure = 4,
    /// Approach.
    Approach = 5,
    /// En-route radar (centre).
    Radar = 6,
    /// ATIS broadcast station.
    Atis = 7,
}

impl TryFrom<u8> for AtcType {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Unknown,
            1 => Self::Delivery,
            2 => Self::Ground,
            3 => Self::Tower,
            4 => Self::Departure,
            5 => Self::Approach,
            6 => Self::Radar,
            7 => Self::Atis,
            other => return Err(ModelError::InvalidAtcType(other)),
        })
    }
}

impl From<AtcType> for u8 {
    fn from(t: AtcType) -> Self {
        t as u8
    }
}

// ---------------------------------------------------------------------------
// AtcInfo / PilotInfo
// ---------------------------------------------------------------------------

/// An online controller position (`GET /api/v1/atc`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtcInfo {
    /// Position callsign, e.g. `"EDDF_TWR"`.
    pub callsign: String,
    /// Primary frequency, e.g. `"119.900"`.
    pub frequency: String,
    /// Visibility range in nautical miles.
    pub visual_range: f64,
    /// Controller information lines.
    #[serde(default)]
    pub text_atis: Vec<String>,
    /// Facility type.
    #[serde(rename = "type")]
    pub atc_type: AtcType,
    /// Latitude of the position, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude of the position, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// An online pilot (`GET /api/v1/pilot`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PilotInfo {
    /// Flight callsign.
    pub callsign: String,
    /// Pilot name as registered on the network.
    pub name: String,
    /// Latitude, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Altitude in feet.
    pub altitude: f64,
    /// Heading in degrees.
    pub heading: f64,
    /// Ground speed in knots.
    pub groundspeed: f64,
    /// Filed departure airport.
    pub departure: String,
    /// Filed arrival airport.
    pub arrival: String,
    /// Aircraft type designator.
    pub aircraft: String,
}
