mod common;

use chrono::{DateTime, Utc};
use nxapi_models::AtcType;
use nxapi_sdk::ReleaseQuery;

use common::mock_client;

#[tokio::test]
async fn weather_reports() {
    let (client, _) = mock_client(0).await;

    let metar = client.metar("EDDF", None).await.unwrap();
    assert_eq!(metar.icao, "EDDF");
    assert_eq!(metar.source, "vatsim");
    assert!(metar.metar.starts_with("EDDF "));

    let taf = client.taf("KJFK", Some("ms")).await.unwrap();
    assert_eq!(taf.source, "ms");
    assert!(taf.taf.starts_with("TAF KJFK"));

    let atis = client.atis("KLAX", None).await.unwrap();
    assert!(atis.is_split());
    let atis = client.atis("EGLL", None).await.unwrap();
    assert!(atis.combined.is_some());
}

#[tokio::test]
async fn airports_single_and_batch() {
    let (client, _) = mock_client(0).await;

    let eddf = client.airport("EDDF").await.unwrap();
    assert_eq!(eddf.iata, "FRA");
    assert_eq!(eddf.trans_alt, 5000.0);

    let batch = client.airports(&["EDDF", "KLAX", "QQQQ"]).await.unwrap();
    let icaos: Vec<&str> = batch.iter().map(|a| a.icao.as_str()).collect();
    assert_eq!(icaos, vec!["EDDF", "KLAX"]);
}

#[tokio::test]
async fn controllers_and_pilots() {
    let (client, _) = mock_client(0).await;

    let atc = client.atc("vatsim").await.unwrap();
    assert_eq!(atc[0].atc_type, AtcType::Tower);
    assert_eq!(atc[1].atc_type, AtcType::Atis);

    let pilots = client.pilots("vatsim").await.unwrap();
    assert_eq!(pilots[0].departure, "EDDF");
}

#[tokio::test]
async fn charts_for_known_and_unknown_airports() {
    let (client, _) = mock_client(0).await;
    let charts = client.charts("KJFK").await.unwrap();
    assert_eq!(charts.charts.map(|c| c.len()), Some(3));

    let none = client.charts("QQQQ").await.unwrap();
    assert!(none.charts.is_none());
}

#[tokio::test]
async fn satellite_epochs_are_dates() {
    let (client, _) = mock_client(0).await;
    let gnss = client.gnss().await.unwrap();
    assert_eq!(gnss.len(), 2);
    let _: DateTime<Utc> = gnss[0].epoch;

    let gps = client.satellites(Some("gps")).await.unwrap();
    assert_eq!(gps.len(), 1);
    assert!(gps[0].tle_line_one.starts_with("1 24876U"));

    let all = client.satellites(None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn git_versions() {
    let (client, _) = mock_client(0).await;

    let commit = client
        .newest_commit("flybywiresim", "a32nx", "master")
        .await
        .unwrap();
    assert_eq!(commit.sha.len(), 40);
    assert_eq!(commit.short_sha, &commit.sha[..7]);

    let stable = client
        .releases("flybywiresim", "a32nx", ReleaseQuery::default())
        .await
        .unwrap();
    assert_eq!(stable.len(), 9);
    assert!(stable.iter().all(|r| !r.is_pre_release));

    let everything = client
        .releases(
            "flybywiresim",
            "a32nx",
            ReleaseQuery {
                include_pre_releases: true,
                ..ReleaseQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(everything.len(), 12);

    let first = client
        .releases(
            "flybywiresim",
            "a32nx",
            ReleaseQuery {
                take: Some(5),
                ..ReleaseQuery::default()
            },
        )
        .await
        .unwrap();
    let second = client
        .releases(
            "flybywiresim",
            "a32nx",
            ReleaseQuery {
                skip: Some(5),
                take: Some(5),
                ..ReleaseQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(first.len(), 5);
    assert_ne!(first[0].name, second[0].name);
    assert!(first[4].published_at > second[0].published_at);

    let pulls = client.pulls("flybywiresim", "a32nx").await.unwrap();
    assert_eq!(pulls.len(), 2);
    let artifact = client.artifact("flybywiresim", "a32nx", "42").await.unwrap();
    assert!(artifact.artifact_url.ends_with("42.zip"));
    let missing = client.artifact("flybywiresim", "a32nx", "7").await.unwrap_err();
    assert_eq!(missing.status(), Some(404));
}

#[tokio::test]
async fn hoppie_relay() {
    let (client, _) = mock_client(0).await;
    let reply = client
        .hoppie(&serde_json::json!({ "logon": "XXXX", "from": "DLH4CK", "type": "ping" }))
        .await
        .unwrap();
    assert_eq!(reply.response, "ok {ping}");
}

#[tokio::test]
async fn public_telex_queries() {
    let (client, _) = mock_client(25).await;

    assert_eq!(client.count_connections().await.unwrap(), 25);

    let found = client.find_connections("MCK001").await.unwrap();
    assert_eq!(found.matches.len(), 10);
    assert!(found.full_match.is_none());

    let exact = client.find_connections("MCK0012").await.unwrap();
    assert_eq!(exact.full_match.as_ref().map(|c| c.flight.as_str()), Some("MCK0012"));
}

#[tokio::test]
async fn repeated_fetch_by_id_is_stable() {
    let (client, _) = mock_client(3).await;
    let page = client.fetch_connections(None, Some(1), None).await.unwrap();
    let id = &page.results[0].id;

    let a = client.fetch_connection(id).await.unwrap();
    let b = client.fetch_connection(id).await.unwrap();
    assert_eq!(a, b);
    let _: DateTime<Utc> = a.first_contact;
    assert!(a.last_contact > a.first_contact);
}
