//! Satellite orbital elements (GNSS constellation and general satellites).
//!
//! Elements follow the CCSDS OMM naming used by CelesTrak. Their `epoch` is
//! sometimes published without a UTC offset; such values are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Orbital elements of one GNSS satellite (`GET /api/v1/gnss`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GnssResponse {
    /// Object name, e.g. `"GPS BIIR-2  (PRN 13)"`.
    pub name: String,
    /// International designator.
    pub id: String,
    /// Element set epoch.
    #[serde(deserialize_with = "epoch")]
    pub epoch: DateTime<Utc>,
    /// Revolutions per day.
    pub mean_motion: f64,
    /// Orbit eccentricity.
    pub eccentricity: f64,
    /// Inclination in degrees.
    pub inclination: f64,
    /// Right ascension of the ascending node in degrees.
    pub ra_of_asc_node: f64,
    /// Argument of pericenter in degrees.
    pub arg_of_pericenter: f64,
    /// Mean anomaly in degrees.
    pub mean_anomaly: f64,
    /// Ephemeris type (usually 0).
    pub ephemeris_type: u32,
    /// Classification, `"U"` for unclassified.
    pub classification_type: String,
    /// NORAD catalogue number.
    pub norad_cat_id: u64,
    /// Element set number.
    pub element_set_no: u32,
    /// Revolution number at epoch.
    pub rev_at_epoch: u64,
    /// B* drag term.
    pub bstar: f64,
    /// First derivative of mean motion.
    pub mean_motion_dot: f64,
    /// Second derivative of mean motion.
    pub mean_motion_ddot: f64,
}

/// Orbital elements plus the raw two-line element set
/// (`GET /api/v1/satellites`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteResponse {
    /// Common orbital elements.
    #[serde(flatten)]
    pub elements: GnssResponse,
    /// First TLE line.
    pub tle_line_one: String,
    /// Second TLE line.
    pub tle_line_two: String,
}

/// Accept RFC 3339 timestamps, falling back to offset-less ISO 8601 as UTC.
fn epoch<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn elements_json(epoch: &str) -> serde_json::Value {
        serde_json::json!({
            "name": "GPS BIIR-2  (PRN 13)",
            "id": "1997-035A",
            "epoch": epoch,
            "meanMotion": 2.00563,
            "eccentricity": 0.0090,
            "inclination": 55.4,
            "raOfAscNode": 152.1,
            "argOfPericenter": 52.7,
            "meanAnomaly": 308.1,
            "ephemerisType": 0,
            "classificationType": "U",
            "noradCatId": 24876,
            "elementSetNo": 999,
            "revAtEpoch": 18650,
            "bstar": 0.0,
            "meanMotionDot": -0.00000085,
            "meanMotionDdot": 0.0
        })
    }

    #[test]
    fn epoch_with_offset() {
        let gnss: GnssResponse =
            serde_json::from_value(elements_json("2024-03-01T12:30:00.000Z")).unwrap();
        assert_eq!(gnss.epoch.year(), 2024);
        assert_eq!(gnss.epoch.hour(), 12);
    }

    #[test]
    fn epoch_without_offset_is_utc() {
        let gnss: GnssResponse =
            serde_json::from_value(elements_json("2024-03-01T12:30:00.123456")).unwrap();
        assert_eq!(gnss.epoch.minute(), 30);
        assert_eq!(gnss.epoch.timezone(), Utc);
    }

    #[test]
    fn epoch_garbage_is_rejected() {
        assert!(serde_json::from_value::<GnssResponse>(elements_json("yesterday")).is_err());
    }

    #[test]
    fn satellite_flattens_elements() {
        let mut json = elements_json("2024-03-01T12:30:00Z");
        json["tleLineOne"] = "1 24876U 97035A   24061.52083333 -.00000085  00000-0  00000-0 0  9999".into();
        json["tleLineTwo"] = "2 24876  55.4000 152.1000 0090000  52.7000 308.1000  2.00563000186505".into();
        let sat: SatelliteResponse = serde_json::from_value(json).unwrap();
        assert_eq!(sat.elements.norad_cat_id, 24876);
        assert!(sat.tle_line_one.starts_with("1 24876U"));
    }
}
