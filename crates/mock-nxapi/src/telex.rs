//! Stateful Telex endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use chrono::Utc;
use nxapi_models::{
    Bounds, ConnectionStatus, Paginated, Point, SearchResult, SendMessageRequest,
    TelexConnection, TelexMessage, Token,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{MockState, fixed_time};

/// Largest page the listing endpoint hands out, whatever `take` asks for.
const MAX_TAKE: usize = 100;

type Reply<T> = Result<Json<T>, StatusCode>;

/// Connections, their bearer tokens and undelivered messages.
#[derive(Debug, Default)]
pub struct TelexStore {
    connections: Vec<TelexConnection>,
    tokens: HashMap<String, String>,
    messages: Vec<TelexMessage>,
}

impl TelexStore {
    /// A store holding `flights` idle, token-less connections.
    pub fn with_fleet(flights: usize) -> Self {
        let connections = (0..flights)
            .map(|i| {
                let n = i as f64;
                TelexConnection {
                    id: Uuid::new_v4().to_string(),
                    is_active: true,
                    first_contact: fixed_time(i as i64),
                    last_contact: fixed_time(i as i64 + 60),
                    flight: format!("MCK{i:04}"),
                    location: Point {
                        x: (n * 7.3) % 360.0 - 180.0,
                        y: (n * 3.1) % 120.0 - 60.0,
                    },
                    true_altitude: 30_000.0 + (i % 10) as f64 * 1_000.0,
                    heading: (n * 17.0) % 360.0,
                    freetext_enabled: i % 2 == 0,
                    aircraft_type: "A20N".to_string(),
                    origin: "EDDF".to_string(),
                    destination: "KJFK".to_string(),
                }
            })
            .collect();
        Self {
            connections,
            ..Self::default()
        }
    }

    /// Number of open connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Whether no connection is open.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<usize, StatusCode> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let id = self.tokens.get(token).ok_or(StatusCode::UNAUTHORIZED)?;
        self.connections
            .iter()
            .position(|c| &c.id == id)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

fn apply(connection: &mut TelexConnection, status: ConnectionStatus) {
    connection.location = status.location;
    connection.true_altitude = status.true_altitude;
    connection.heading = status.heading;
    connection.origin = status.origin;
    connection.destination = status.destination;
    connection.freetext_enabled = status.freetext_enabled;
    connection.flight = status.flight;
    connection.aircraft_type = status.aircraft_type;
    connection.last_contact = Utc::now();
    connection.is_active = true;
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub(crate) async fn connect(
    State(state): State<Arc<MockState>>,
    Json(status): Json<ConnectionStatus>,
) -> Reply<Token> {
    if status.flight.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let now = Utc::now();
    let mut connection = TelexConnection {
        id: Uuid::new_v4().to_string(),
        is_active: true,
        first_contact: now,
        last_contact: now,
        flight: String::new(),
        location: status.location,
        true_altitude: 0.0,
        heading: 0.0,
        freetext_enabled: false,
        aircraft_type: String::new(),
        origin: String::new(),
        destination: String::new(),
    };
    apply(&mut connection, status);

    let token = Token {
        access_token: Uuid::new_v4().simple().to_string(),
        connection: connection.id.clone(),
        flight: connection.flight.clone(),
    };

    let mut store = state.telex.lock().await;
    store
        .tokens
        .insert(token.access_token.clone(), connection.id.clone());
    store.connections.push(connection);
    tracing::info!(flight = %token.flight, "mock telex connect");
    Ok(Json(token))
}

pub(crate) async fn update(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(status): Json<ConnectionStatus>,
) -> Reply<TelexConnection> {
    let mut store = state.telex.lock().await;
    let idx = store.authenticate(&headers)?;
    let connection = &mut store.connections[idx];
    apply(connection, status);
    Ok(Json(connection.clone()))
}

pub(crate) async fn disconnect(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let mut store = state.telex.lock().await;
    let idx = store.authenticate(&headers)?;
    let connection = store.connections.remove(idx);
    store.tokens.retain(|_, id| *id != connection.id);
    tracing::info!(flight = %connection.flight, "mock telex disconnect");
    Ok(StatusCode::OK)
}

pub(crate) async fn send(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(req): Json<SendMessageRequest>,
) -> Reply<TelexMessage> {
    let mut store = state.telex.lock().await;
    let sender = store.authenticate(&headers)?;
    let recipient = store
        .connections
        .iter()
        .find(|c| c.flight == req.to)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    if !recipient.freetext_enabled {
        return Err(StatusCode::FORBIDDEN);
    }
    let message = TelexMessage {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        received: false,
        message: req.message,
        is_profane: false,
        from: store.connections[sender].clone(),
        to: Some(recipient),
    };
    store.messages.push(message.clone());
    Ok(Json(message))
}

pub(crate) async fn inbox(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> Reply<Vec<TelexMessage>> {
    let mut store = state.telex.lock().await;
    let idx = store.authenticate(&headers)?;
    let me = store.connections[idx].id.clone();
    let mut pending = Vec::new();
    for msg in store.messages.iter_mut() {
        if !msg.received && msg.to.as_ref().is_some_and(|to| to.id == me) {
            pending.push(msg.clone());
            msg.received = true;
        }
    }
    Ok(Json(pending))
}

// ---------------------------------------------------------------------------
// Public queries
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub(crate) struct ListQuery {
    skip: Option<usize>,
    take: Option<usize>,
    north: Option<f64>,
    east: Option<f64>,
    south: Option<f64>,
    west: Option<f64>,
}

impl ListQuery {
    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds {
            north: self.north?,
            east: self.east?,
            south: self.south?,
            west: self.west?,
        })
    }
}

pub(crate) async fn list(
    State(state): State<Arc<MockState>>,
    Query(q): Query<ListQuery>,
) -> Json<Paginated<TelexConnection>> {
    let store = state.telex.lock().await;
    let bounds = q.bounds();
    let matching: Vec<&TelexConnection> = store
        .connections
        .iter()
        .filter(|c| bounds.is_none_or(|b| b.contains(c.location)))
        .collect();
    let take = q.take.unwrap_or(MAX_TAKE).min(MAX_TAKE);
    let results: Vec<TelexConnection> = matching
        .iter()
        .skip(q.skip.unwrap_or(0))
        .take(take)
        .map(|c| (*c).clone())
        .collect();
    Json(Paginated {
        count: results.len() as u64,
        total: matching.len() as u64,
        results,
    })
}

pub(crate) async fn fetch(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
) -> Reply<TelexConnection> {
    let store = state.telex.lock().await;
    store
        .connections
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Deserialize)]
pub(crate) struct FindQuery {
    flight: String,
}

pub(crate) async fn find(
    State(state): State<Arc<MockState>>,
    Query(q): Query<FindQuery>,
) -> Json<SearchResult<TelexConnection>> {
    let store = state.telex.lock().await;
    let needle = q.flight.to_uppercase();
    let matches: Vec<TelexConnection> = store
        .connections
        .iter()
        .filter(|c| c.flight.to_uppercase().contains(&needle))
        .cloned()
        .collect();
    let full_match = matches
        .iter()
        .find(|c| c.flight.eq_ignore_ascii_case(&q.flight))
        .cloned();
    Json(SearchResult {
        full_match,
        matches,
    })
}

pub(crate) async fn count(State(state): State<Arc<MockState>>) -> Json<u64> {
    Json(state.telex.lock().await.len() as u64)
}
