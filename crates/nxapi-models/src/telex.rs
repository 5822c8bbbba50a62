//! Telex: live flight positions and free-text messaging between flights.
//!
//! The remote service stores positions on a planar `x`/`y` grid where `x`
//! is longitude and `y` is latitude. Outgoing status updates are described
//! geographically by [`AircraftStatus`] and relabelled to the wire shape
//! [`ConnectionStatus`] by the SDK session before they are sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Wire position: `x` is longitude, `y` is latitude, both in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Longitude.
    pub x: f64,
    /// Latitude.
    pub y: f64,
}

/// Geographic position used by callers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Longitude in degrees, east positive.
    pub long: f64,
    /// Latitude in degrees, north positive.
    pub lat: f64,
}

impl From<Point> for GeoLocation {
    fn from(p: Point) -> Self {
        Self { long: p.x, lat: p.y }
    }
}

impl From<GeoLocation> for Point {
    fn from(g: GeoLocation) -> Self {
        Self { x: g.long, y: g.lat }
    }
}

/// Geographic filter for connection listings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Northern latitude limit.
    pub north: f64,
    /// Eastern longitude limit.
    pub east: f64,
    /// Southern latitude limit.
    pub south: f64,
    /// Western longitude limit.
    pub west: f64,
}

impl Bounds {
    /// Whether `point` lies inside the box (edges inclusive).
    ///
    /// Boxes crossing the antimeridian (`west > east`) wrap around.
    pub fn contains(&self, point: Point) -> bool {
        let lat_ok = point.y <= self.north && point.y >= self.south;
        let lon_ok = if self.west <= self.east {
            point.x >= self.west && point.x <= self.east
        } else {
            point.x >= self.west || point.x <= self.east
        };
        lat_ok && lon_ok
    }
}

// ---------------------------------------------------------------------------
// Aircraft status
// ---------------------------------------------------------------------------

/// Status an aircraft reports when connecting or updating.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AircraftStatus {
    /// Current position.
    pub location: GeoLocation,
    /// True altitude in feet.
    pub true_altitude: f64,
    /// Heading in degrees.
    pub heading: f64,
    /// Departure airport.
    pub origin: String,
    /// Arrival airport.
    pub destination: String,
    /// Whether the aircraft accepts free-text messages.
    pub freetext_enabled: bool,
    /// Flight number, e.g. `"DLH4CK"`.
    pub flight: String,
    /// Aircraft type designator.
    pub aircraft_type: String,
}

impl From<&TelexConnection> for AircraftStatus {
    fn from(c: &TelexConnection) -> Self {
        Self {
            location: c.location.into(),
            true_altitude: c.true_altitude,
            heading: c.heading,
            origin: c.origin.clone(),
            destination: c.destination.clone(),
            freetext_enabled: c.freetext_enabled,
            flight: c.flight.clone(),
            aircraft_type: c.aircraft_type.clone(),
        }
    }
}

/// Body of `POST /txcxn` and `PUT /txcxn`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    /// Position on the wire grid.
    pub location: Point,
    /// True altitude in feet.
    pub true_altitude: f64,
    /// Heading in degrees.
    pub heading: f64,
    /// Departure airport.
    pub origin: String,
    /// Arrival airport.
    pub destination: String,
    /// Whether the aircraft accepts free-text messages.
    pub freetext_enabled: bool,
    /// Flight number.
    pub flight: String,
    /// Aircraft type designator.
    pub aircraft_type: String,
}

// ---------------------------------------------------------------------------
// Connections
// ---------------------------------------------------------------------------

/// One tracked flight.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TelexConnection {
    /// Server-assigned connection id.
    pub id: String,
    /// Whether the flight reported recently.
    pub is_active: bool,
    /// Time of the connect call.
    pub first_contact: DateTime<Utc>,
    /// Time of the most recent update.
    pub last_contact: DateTime<Utc>,
    /// Flight number.
    pub flight: String,
    /// Last reported position.
    pub location: Point,
    /// True altitude in feet.
    pub true_altitude: f64,
    /// Heading in degrees.
    pub heading: f64,
    /// Whether the flight accepts free-text messages.
    pub freetext_enabled: bool,
    /// Aircraft type designator.
    pub aircraft_type: String,
    /// Departure airport.
    pub origin: String,
    /// Arrival airport.
    pub destination: String,
}

impl TelexConnection {
    /// Position as longitude/latitude.
    pub fn geo_location(&self) -> GeoLocation {
        self.location.into()
    }
}

/// Credential returned by `POST /txcxn`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Bearer token for authenticated Telex calls.
    pub access_token: String,
    /// Id of the connection the token belongs to.
    pub connection: String,
    /// Flight number the connection was opened for.
    pub flight: String,
}

/// Result of `GET /txcxn/_find`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T> {
    /// Exact match on the query, if any.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub full_match: Option<T>,
    /// Partial matches.
    pub matches: Vec<T>,
}

/// One page of a listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Records in this page.
    pub results: Vec<T>,
    /// Number of records in this page.
    pub count: u64,
    /// Number of records matching the query across all pages.
    pub total: u64,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A free-text message between two flights.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TelexMessage {
    /// Message id.
    pub id: String,
    /// Time the server accepted the message.
    pub created_at: DateTime<Utc>,
    /// Whether the recipient already fetched it.
    pub received: bool,
    /// Message text (profanity masked by the server).
    pub message: String,
    /// Whether the server flagged the text.
    pub is_profane: bool,
    /// Sender.
    pub from: TelexConnection,
    /// Recipient, when still connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<TelexConnection>,
}

/// Body of `POST /txmsg`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    /// Recipient flight number.
    pub to: String,
    /// Message text.
    pub message: String,
}
