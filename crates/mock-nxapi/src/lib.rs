//! In-memory stand-in for the NX API.
//!
//! Serves canned weather, airport, network, satellite and git fixtures and
//! a fully stateful Telex service (connections, tokens, messages). Used by
//! the SDK integration tests and by `mock-nxapi` for local development.
//!
//! ```rust,no_run
//! # async fn run() -> std::io::Result<()> {
//! let state = mock_nxapi::MockState::with_fleet(237);
//! let addr = mock_nxapi::spawn(state.clone()).await?;
//! println!("mock listening on http://{addr}");
//! # Ok(())
//! # }
//! ```

mod fixtures;
mod telex;

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::Mutex;

pub use telex::TelexStore;

/// Shared state behind every handler.
#[derive(Debug, Default)]
pub struct MockState {
    telex: Mutex<TelexStore>,
    requests: AtomicUsize,
}

impl MockState {
    /// Empty Telex network.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Telex network pre-populated with `flights` idle connections.
    pub fn with_fleet(flights: usize) -> Arc<Self> {
        Arc::new(Self {
            telex: Mutex::new(TelexStore::with_fleet(flights)),
            requests: AtomicUsize::new(0),
        })
    }

    /// Requests served so far, all routes included.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Number of Telex connections currently open.
    pub async fn connection_count(&self) -> usize {
        self.telex.lock().await.len()
    }
}

/// Build the API router on top of `state`.
pub fn router(state: Arc<MockState>) -> Router {
    Router::new()
        // Weather
        .route("/metar/{icao}", get(fixtures::metar))
        .route("/taf/{icao}", get(fixtures::taf))
        .route("/atis/{icao}", get(fixtures::atis))
        // Airports & charts
        .route("/api/v1/airport/_batch", post(fixtures::airport_batch))
        .route("/api/v1/airport/{icao}", get(fixtures::airport))
        .route("/api/v1/charts/{icao}", get(fixtures::charts))
        // Networks
        .route("/api/v1/atc", get(fixtures::atc))
        .route("/api/v1/pilot", get(fixtures::pilots))
        // Satellites
        .route("/api/v1/gnss", get(fixtures::gnss))
        .route("/api/v1/satellites", get(fixtures::satellites))
        // Git
        .route(
            "/api/v1/git-versions/{user}/{repo}/branches/{branch}",
            get(fixtures::newest_commit),
        )
        .route("/api/v1/git-versions/{user}/{repo}/releases", get(fixtures::releases))
        .route("/api/v1/git-versions/{user}/{repo}/pulls", get(fixtures::pulls))
        .route(
            "/api/v1/git-versions/{user}/{repo}/pulls/{pull}/artifact",
            get(fixtures::artifact),
        )
        .route("/api/v1/hoppie", post(fixtures::hoppie))
        // Telex
        .route(
            "/txcxn",
            get(telex::list)
                .post(telex::connect)
                .put(telex::update)
                .delete(telex::disconnect),
        )
        .route("/txcxn/_find", get(telex::find))
        .route("/txcxn/_count", get(telex::count))
        .route("/txcxn/{id}", get(telex::fetch))
        .route("/txmsg", get(telex::inbox).post(telex::send))
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .with_state(state)
}

/// Serve the mock on an ephemeral localhost port in the background.
pub async fn spawn(state: Arc<MockState>) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router(state);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "mock server stopped");
        }
    });
    Ok(addr)
}

async fn count_requests(State(state): State<Arc<MockState>>, req: Request, next: Next) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(method = %req.method(), uri = %req.uri(), "mock request");
    next.run(req).await
}

/// Deterministic timestamp `secs` after 2024-01-01T00:00:00Z.
pub(crate) fn fixed_time(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(1_704_067_200 + secs)
}
