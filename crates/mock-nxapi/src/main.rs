//! Stand-alone mock of the NX API for local development.
//!
//! Point the SDK or CLI at it with `NXAPI_URL=http://localhost:3000`.

use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("MOCK_NXAPI_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let fleet: usize = std::env::var("MOCK_NXAPI_FLEET")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(250);

    let state = mock_nxapi::MockState::with_fleet(fleet);
    let app = mock_nxapi::router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, fleet, "mock NX API listening");
    axum::serve(listener, app).await
}
