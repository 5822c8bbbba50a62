#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use mock_nxapi::MockState;
use nxapi_models::{AircraftStatus, GeoLocation};
use nxapi_sdk::{ClientConfig, NxApiClient};

/// Client pointed at a freshly spawned mock holding `fleet` connections.
pub async fn mock_client(fleet: usize) -> (NxApiClient, Arc<MockState>) {
    let state = MockState::with_fleet(fleet);
    let addr = mock_nxapi::spawn(state.clone()).await.unwrap();
    (client_for(addr), state)
}

/// Client pointed at an ad-hoc router.
pub async fn router_client(app: Router) -> NxApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    client_for(addr)
}

pub fn client_for(addr: SocketAddr) -> NxApiClient {
    NxApiClient::new(ClientConfig::new(&format!("http://{addr}")).unwrap())
}

pub fn status(flight: &str, long: f64, lat: f64) -> AircraftStatus {
    AircraftStatus {
        location: GeoLocation { long, lat },
        true_altitude: 50.0,
        heading: 50.0,
        origin: "KLAX".into(),
        destination: "KJFK".into(),
        freetext_enabled: true,
        flight: flight.into(),
        aircraft_type: "Unit Test".into(),
    }
}
