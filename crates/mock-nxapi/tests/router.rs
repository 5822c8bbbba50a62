use axum::http::StatusCode;
use axum_test::TestServer;
use mock_nxapi::{MockState, router};
use nxapi_models::{Paginated, TelexConnection, Token};
use serde_json::json;

fn server(fleet: usize) -> TestServer {
    TestServer::new(router(MockState::with_fleet(fleet))).unwrap()
}

fn status(flight: &str) -> serde_json::Value {
    json!({
        "location": { "x": 8.56, "y": 50.03 },
        "trueAltitude": 364,
        "heading": 250,
        "origin": "EDDF",
        "destination": "KJFK",
        "freetextEnabled": true,
        "flight": flight,
        "aircraftType": "A20N"
    })
}

#[tokio::test]
async fn listing_caps_take_at_one_hundred() {
    let server = server(150);
    let page: Paginated<TelexConnection> = server
        .get("/txcxn")
        .add_query_param("take", 500)
        .await
        .json();
    assert_eq!(page.count, 100);
    assert_eq!(page.total, 150);
}

#[tokio::test]
async fn listing_honours_skip() {
    let server = server(150);
    let page: Paginated<TelexConnection> = server
        .get("/txcxn")
        .add_query_param("skip", 120)
        .await
        .json();
    assert_eq!(page.count, 30);
    assert_eq!(page.results[0].flight, "MCK0120");
}

#[tokio::test]
async fn unknown_airport_is_404() {
    let server = server(0);
    server
        .get("/metar/QQQQ")
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn atc_requires_source() {
    let server = server(0);
    server
        .get("/api/v1/atc")
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_requires_bearer_token() {
    let server = server(0);
    server
        .put("/txcxn")
        .json(&status("TEST-1"))
        .expect_failure()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn connect_then_disconnect() {
    let server = server(0);
    let token: Token = server.post("/txcxn").json(&status("TEST-1")).await.json();
    assert_eq!(token.flight, "TEST-1");

    let count: u64 = server.get("/txcxn/_count").await.json();
    assert_eq!(count, 1);

    server
        .delete("/txcxn")
        .authorization_bearer(&token.access_token)
        .await
        .assert_status_ok();

    let count: u64 = server.get("/txcxn/_count").await.json();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn new_state_starts_empty_and_counts_requests() {
    let state = MockState::new();
    let server = TestServer::new(router(state.clone())).unwrap();

    let count: u64 = server.get("/txcxn/_count").await.json();
    assert_eq!(count, 0);

    let page: Paginated<TelexConnection> = server.get("/txcxn").await.json();
    assert!(page.results.is_empty());
    assert_eq!(page.total, 0);

    assert_eq!(state.connection_count().await, 0);
    assert_eq!(state.requests(), 2);
}
