//! Telex: flight positions and free-text messaging.
//!
//! Public queries (listing, lookup, search, count) need no credential and
//! live directly on [`NxApiClient`]. Everything that acts on behalf of one
//! flight goes through a [`TelexSession`], which holds the bearer token
//! issued by `connect`.
//!
//! # Session lifecycle
//!
//! ```text
//!   ┌──────────────┐  connect(status)   ┌───────────┐
//!   │ Disconnected │ ─────────────────► │ Connected │ ◄─┐ update / send_message /
//!   └──────────────┘ ◄───────────────── └───────────┘ ──┘ fetch_messages / connect
//!                        disconnect()
//! ```
//!
//! Calls that need a session fail with [`SdkError::NotConnected`] before
//! any request is made. A failed `connect`, including one answered with
//! an unusable token, leaves the previous state as it was; a failed
//! `disconnect` keeps the token.
//!
//! # Example
//!
//! ```rust,no_run
//! use nxapi_models::{AircraftStatus, GeoLocation};
//! use nxapi_sdk::{NxApiClient, TelexSession};
//!
//! # async fn run() -> Result<(), nxapi_sdk::SdkError> {
//! let mut session = TelexSession::new(NxApiClient::from_env()?);
//! let status = AircraftStatus {
//!     location: GeoLocation { long: 8.56, lat: 50.03 },
//!     true_altitude: 364.0,
//!     heading: 250.0,
//!     origin: "EDDF".into(),
//!     destination: "KJFK".into(),
//!     freetext_enabled: true,
//!     flight: "DLH4CK".into(),
//!     aircraft_type: "A20N".into(),
//! };
//! session.connect(&status).await?;
//! session.send_message("BAW117", "HELLO FROM DLH4CK").await?;
//! session.disconnect().await?;
//! # Ok(())
//! # }
//! ```

use futures::stream::{self, Stream, TryStreamExt};
use nxapi_models::{
    AircraftStatus, Bounds, ConnectionStatus, ModelError, Paginated, SearchResult,
    SendMessageRequest, TelexConnection, TelexMessage, Token,
};
use reqwest::header::HeaderMap;
use tracing::{debug, info, warn};

use crate::client::NxApiClient;
use crate::error::SdkError;
use crate::http::bearer;

/// Records requested per page by [`NxApiClient::all_connections`].
pub const PAGE_SIZE: u64 = 100;

/// Consecutive empty pages tolerated before a listing is declared stalled.
pub const MAX_EMPTY_PAGES: u32 = 3;

// ---------------------------------------------------------------------------
// Public queries
// ---------------------------------------------------------------------------

impl NxApiClient {
    /// One connection by id (`GET /txcxn/{id}`).
    pub async fn fetch_connection(&self, id: &str) -> Result<TelexConnection, SdkError> {
        let id = ModelError::require("id", id)?;
        let url = self.endpoint(&["txcxn", id])?;
        self.http().get(url, None).await
    }

    /// A single page of connections (`GET /txcxn`).
    ///
    /// Query parameters are only sent when given; `bounds` expands to
    /// `north`, `east`, `south`, `west`.
    pub async fn fetch_connections(
        &self,
        skip: Option<u64>,
        take: Option<u64>,
        bounds: Option<Bounds>,
    ) -> Result<Paginated<TelexConnection>, SdkError> {
        let url = self.endpoint_with_query(
            &["txcxn"],
            &[
                ("skip", skip.map(|v| v.to_string())),
                ("take", take.map(|v| v.to_string())),
                ("north", bounds.map(|b| b.north.to_string())),
                ("east", bounds.map(|b| b.east.to_string())),
                ("south", bounds.map(|b| b.south.to_string())),
                ("west", bounds.map(|b| b.west.to_string())),
            ],
        )?;
        self.http().get(url, None).await
    }

    /// Connections whose flight number matches `flight` (`GET /txcxn/_find`).
    pub async fn find_connections(
        &self,
        flight: &str,
    ) -> Result<SearchResult<TelexConnection>, SdkError> {
        let flight = ModelError::require("flight", flight)?;
        let url = self.endpoint_with_query(&["txcxn", "_find"], &[("flight", Some(flight.to_owned()))])?;
        self.http().get(url, None).await
    }

    /// Number of active connections (`GET /txcxn/_count`).
    pub async fn count_connections(&self) -> Result<u64, SdkError> {
        let url = self.endpoint(&["txcxn", "_count"])?;
        self.http().get(url, None).await
    }

    /// Every connection, optionally inside `bounds`, as a lazy stream of pages.
    ///
    /// Pages of up to [`PAGE_SIZE`] records are requested one after the
    /// other. The offset advances by the `count` the server reports and the
    /// stream ends once it reaches the most recent `total`. The stream is
    /// not restartable; call again for a fresh listing.
    ///
    /// After [`MAX_EMPTY_PAGES`] consecutive empty pages short of `total`
    /// the stream yields [`SdkError::StalledPagination`] and ends.
    pub fn all_connections(
        &self,
        bounds: Option<Bounds>,
    ) -> impl Stream<Item = Result<Paginated<TelexConnection>, SdkError>> + Send + 'static {
        let cursor = PageCursor {
            client: self.clone(),
            bounds,
            skip: 0,
            total: None,
            empty_pages: 0,
        };
        stream::try_unfold(cursor, PageCursor::next_page)
    }

    /// Drain [`all_connections`](Self::all_connections) into one vector.
    pub async fn collect_all_connections(
        &self,
        bounds: Option<Bounds>,
    ) -> Result<Vec<TelexConnection>, SdkError> {
        self.all_connections(bounds)
            .try_fold(Vec::new(), |mut flights, page| async move {
                flights.extend(page.results);
                Ok::<_, SdkError>(flights)
            })
            .await
    }
}

/// Position of an in-progress listing.
struct PageCursor {
    client: NxApiClient,
    bounds: Option<Bounds>,
    skip: u64,
    total: Option<u64>,
    empty_pages: u32,
}

impl PageCursor {
    async fn next_page(
        mut self,
    ) -> Result<Option<(Paginated<TelexConnection>, Self)>, SdkError> {
        if self.total.is_some_and(|total| self.skip >= total) {
            return Ok(None);
        }

        let page = self
            .client
            .fetch_connections(Some(self.skip), Some(PAGE_SIZE), self.bounds)
            .await?;
        self.total = Some(page.total);

        if page.count == 0 && self.skip < page.total {
            self.empty_pages += 1;
            if self.empty_pages >= MAX_EMPTY_PAGES {
                warn!(
                    skip = self.skip,
                    total = page.total,
                    "connection listing stopped advancing"
                );
                return Err(SdkError::StalledPagination {
                    skip: self.skip,
                    total: page.total,
                });
            }
        } else {
            self.empty_pages = 0;
        }

        self.skip += page.count;
        debug!(skip = self.skip, total = page.total, "connection page received");
        Ok(Some((page, self)))
    }
}

// ---------------------------------------------------------------------------
// TelexSession
// ---------------------------------------------------------------------------

/// One flight's Telex session.
///
/// Owns the bearer token returned by [`connect`](Self::connect). State
/// changes take `&mut self`, so a session cannot be disconnected while
/// another call on it is in flight. Run several sessions side by side by
/// creating several values.
#[derive(Debug, Clone)]
pub struct TelexSession {
    client: NxApiClient,
    token: Option<Token>,
}

impl TelexSession {
    /// A disconnected session on top of `client`.
    pub fn new(client: NxApiClient) -> Self {
        Self {
            client,
            token: None,
        }
    }

    /// Whether a credential is held.
    pub fn is_connected(&self) -> bool {
        self.token.is_some()
    }

    /// The credential issued by the last successful `connect`.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// The underlying client, for the public Telex queries.
    pub fn client(&self) -> &NxApiClient {
        &self.client
    }

    /// Open a connection for `status` (`POST /txcxn`).
    ///
    /// Allowed in either state; a new token replaces the old one.
    pub async fn connect(&mut self, status: &AircraftStatus) -> Result<Token, SdkError> {
        let url = self.client.endpoint(&["txcxn"])?;
        let token: Token = self
            .client
            .http()
            .post(url, &to_wire(status), None)
            .await?;
        if let Err(e) = check_token(&token) {
            warn!(
                flight = %token.flight,
                connection = %token.connection,
                error = %e,
                "connect returned an unusable token"
            );
            return Err(e);
        }
        info!(flight = %token.flight, connection = %token.connection, "telex connected");
        self.token = Some(token.clone());
        Ok(token)
    }

    /// Report a new status for the connected flight (`PUT /txcxn`).
    pub async fn update(&self, status: &AircraftStatus) -> Result<TelexConnection, SdkError> {
        let auth = self.authorization()?;
        let url = self.client.endpoint(&["txcxn"])?;
        self.client
            .http()
            .put(url, &to_wire(status), Some(auth))
            .await
    }

    /// Close the connection (`DELETE /txcxn`) and drop the token.
    pub async fn disconnect(&mut self) -> Result<(), SdkError> {
        let auth = self.authorization()?;
        let url = self.client.endpoint(&["txcxn"])?;
        self.client.http().delete(url, Some(auth)).await?;
        if let Some(token) = self.token.take() {
            info!(flight = %token.flight, connection = %token.connection, "telex disconnected");
        }
        Ok(())
    }

    /// Send `message` to the flight numbered `recipient` (`POST /txmsg`).
    pub async fn send_message(
        &self,
        recipient: &str,
        message: &str,
    ) -> Result<TelexMessage, SdkError> {
        let auth = self.authorization()?;
        let recipient = ModelError::require("recipient", recipient)?;
        let url = self.client.endpoint(&["txmsg"])?;
        let body = SendMessageRequest {
            to: recipient.to_owned(),
            message: message.to_owned(),
        };
        self.client.http().post(url, &body, Some(auth)).await
    }

    /// Messages waiting for this flight (`GET /txmsg`).
    ///
    /// The server marks them received; a second call returns only newer ones.
    pub async fn fetch_messages(&self) -> Result<Vec<TelexMessage>, SdkError> {
        let auth = self.authorization()?;
        let url = self.client.endpoint(&["txmsg"])?;
        self.client.http().get(url, Some(auth)).await
    }

    fn authorization(&self) -> Result<HeaderMap, SdkError> {
        match &self.token {
            Some(token) => bearer(&token.access_token),
            None => Err(SdkError::NotConnected),
        }
    }
}

/// A token is usable when it is non-blank and fits in an `Authorization` header.
fn check_token(token: &Token) -> Result<(), SdkError> {
    if token.access_token.trim().is_empty() {
        return Err(SdkError::InvalidToken("empty access token".into()));
    }
    bearer(&token.access_token).map(drop)
}

/// Relabel a geographic status onto the wire grid: x = longitude, y = latitude.
fn to_wire(status: &AircraftStatus) -> ConnectionStatus {
    ConnectionStatus {
        location: status.location.into(),
        true_altitude: status.true_altitude,
        heading: status.heading,
        origin: status.origin.clone(),
        destination: status.destination.clone(),
        freetext_enabled: status.freetext_enabled,
        flight: status.flight.clone(),
        aircraft_type: status.aircraft_type.clone(),
    }
}
