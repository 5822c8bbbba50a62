//! Canned, read-only endpoints.

use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use chrono::TimeDelta;
use nxapi_models::{
    AirportBatchRequest, AirportResponse, ArtifactInfo, AtcInfo, AtcType, AtisResponse, Chart,
    ChartsResponse, CommitInfo, GnssResponse, HoppieResponse, MetarResponse, PilotInfo, PullInfo,
    PullLabel, ReleaseInfo, SatelliteResponse, TafResponse,
};
use serde::Deserialize;
use serde_json::Value;

use crate::fixed_time;

type Reply<T> = Result<Json<T>, StatusCode>;

// ---------------------------------------------------------------------------
// Airports
// ---------------------------------------------------------------------------

/// `(icao, iata, name, lat, lon, elevation, continent, country, trans_alt)`
const AIRPORTS: &[(&str, &str, &str, f64, f64, f64, &str, &str, f64)] = &[
    ("EDDF", "FRA", "Frankfurt am Main Airport", 50.0333, 8.5706, 364.0, "EU", "DE", 5000.0),
    ("EGLL", "LHR", "London Heathrow Airport", 51.4706, -0.4619, 83.0, "EU", "GB", 6000.0),
    ("KJFK", "JFK", "John F Kennedy International Airport", 40.6398, -73.7789, 13.0, "NA", "US", 18000.0),
    ("KLAX", "LAX", "Los Angeles International Airport", 33.9425, -118.408, 125.0, "NA", "US", 18000.0),
];

fn lookup_airport(icao: &str) -> Option<AirportResponse> {
    AIRPORTS
        .iter()
        .find(|a| a.0.eq_ignore_ascii_case(icao))
        .map(|&(icao, iata, name, lat, lon, elevation, continent, country, trans_alt)| {
            AirportResponse {
                icao: icao.to_string(),
                iata: iata.to_string(),
                airport_type: "large_airport".to_string(),
                name: name.to_string(),
                lat,
                lon,
                elevation,
                continent: continent.to_string(),
                country: country.to_string(),
                trans_alt,
            }
        })
}

fn known_icao(icao: &str) -> Result<String, StatusCode> {
    lookup_airport(icao)
        .map(|a| a.icao)
        .ok_or(StatusCode::NOT_FOUND)
}

pub(crate) async fn airport(Path(icao): Path<String>) -> Reply<AirportResponse> {
    lookup_airport(&icao).map(Json).ok_or(StatusCode::NOT_FOUND)
}

pub(crate) async fn airport_batch(Json(req): Json<AirportBatchRequest>) -> Reply<Vec<AirportResponse>> {
    if req.icaos.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(req.icaos.iter().filter_map(|icao| lookup_airport(icao)).collect()))
}

pub(crate) async fn charts(Path(icao): Path<String>) -> Json<ChartsResponse> {
    let icao = icao.to_uppercase();
    let charts = lookup_airport(&icao).map(|_| {
        ["AIRPORT DIAGRAM", "ILS OR LOC RWY 1", "RNAV (GPS) RWY 19"]
            .iter()
            .enumerate()
            .map(|(i, name)| Chart {
                url: format!("https://charts.example.invalid/{icao}/{i}.pdf"),
                name: (*name).to_string(),
            })
            .collect()
    });
    Json(ChartsResponse { icao, charts })
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub(crate) struct SourceQuery {
    source: Option<String>,
}

impl SourceQuery {
    fn or_default(self) -> String {
        self.source
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "vatsim".to_string())
    }
}

pub(crate) async fn metar(Path(icao): Path<String>, Query(q): Query<SourceQuery>) -> Reply<MetarResponse> {
    let icao = known_icao(&icao)?;
    Ok(Json(MetarResponse {
        metar: format!("{icao} 011150Z 24008KT 9999 FEW030 18/09 Q1016"),
        icao,
        source: q.or_default(),
    }))
}

pub(crate) async fn taf(Path(icao): Path<String>, Query(q): Query<SourceQuery>) -> Reply<TafResponse> {
    let icao = known_icao(&icao)?;
    Ok(Json(TafResponse {
        taf: format!("TAF {icao} 011100Z 0112/0218 24010KT 9999 SCT035"),
        icao,
        source: q.or_default(),
    }))
}

pub(crate) async fn atis(Path(icao): Path<String>, Query(q): Query<SourceQuery>) -> Reply<AtisResponse> {
    let icao = known_icao(&icao)?;
    let source = q.or_default();
    // US fields broadcast separate arrival and departure information.
    let atis = if icao.starts_with('K') {
        AtisResponse {
            arr: Some(format!("{icao} ARR INFO A 1150Z")),
            dep: Some(format!("{icao} DEP INFO B 1150Z")),
            combined: None,
            icao,
            source,
        }
    } else {
        AtisResponse {
            combined: Some(format!("{icao} INFORMATION C 1150Z")),
            arr: None,
            dep: None,
            icao,
            source,
        }
    };
    Ok(Json(atis))
}

// ---------------------------------------------------------------------------
// Networks
// ---------------------------------------------------------------------------

pub(crate) async fn atc(Query(q): Query<SourceQuery>) -> Reply<Vec<AtcInfo>> {
    q.source.filter(|s| !s.is_empty()).ok_or(StatusCode::BAD_REQUEST)?;
    Ok(Json(vec![
        AtcInfo {
            callsign: "EDDF_TWR".into(),
            frequency: "119.900".into(),
            visual_range: 50.0,
            text_atis: vec!["Frankfurt Tower".into()],
            atc_type: AtcType::Tower,
            latitude: Some(50.0333),
            longitude: Some(8.5706),
        },
        AtcInfo {
            callsign: "EDDF_ATIS".into(),
            frequency: "118.025".into(),
            visual_range: 0.0,
            text_atis: vec!["INFORMATION C".into()],
            atc_type: AtcType::Atis,
            latitude: None,
            longitude: None,
        },
    ]))
}

pub(crate) async fn pilots(Query(q): Query<SourceQuery>) -> Reply<Vec<PilotInfo>> {
    q.source.filter(|s| !s.is_empty()).ok_or(StatusCode::BAD_REQUEST)?;
    Ok(Json(vec![PilotInfo {
        callsign: "DLH400".into(),
        name: "Jane Doe".into(),
        latitude: Some(52.1),
        longitude: Some(-20.4),
        altitude: 37000.0,
        heading: 285.0,
        groundspeed: 478.0,
        departure: "EDDF".into(),
        arrival: "KJFK".into(),
        aircraft: "A20N".into(),
    }]))
}

// ---------------------------------------------------------------------------
// Satellites
// ---------------------------------------------------------------------------

fn gnss_elements() -> Vec<GnssResponse> {
    [("GPS BIIR-2  (PRN 13)", "1997-035A", 24876), ("GSAT0101 (GALILEO-PFM)", "2011-060A", 37846)]
        .iter()
        .enumerate()
        .map(|(i, &(name, id, norad))| GnssResponse {
            name: name.to_string(),
            id: id.to_string(),
            epoch: fixed_time(3_600 * i as i64),
            mean_motion: 2.005_63,
            eccentricity: 0.009,
            inclination: 55.4,
            ra_of_asc_node: 152.1,
            arg_of_pericenter: 52.7,
            mean_anomaly: 308.1,
            ephemeris_type: 0,
            classification_type: "U".to_string(),
            norad_cat_id: norad,
            element_set_no: 999,
            rev_at_epoch: 18_650,
            bstar: 0.0,
            mean_motion_dot: -0.000_000_85,
            mean_motion_ddot: 0.0,
        })
        .collect()
}

pub(crate) async fn gnss() -> Json<Vec<GnssResponse>> {
    Json(gnss_elements())
}

#[derive(Deserialize)]
pub(crate) struct SatelliteQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

pub(crate) async fn satellites(Query(q): Query<SatelliteQuery>) -> Json<Vec<SatelliteResponse>> {
    let kind = q.kind.map(|k| k.to_uppercase());
    let sats = gnss_elements()
        .into_iter()
        .filter(|e| match &kind {
            Some(kind) if kind == "GALILEO" => e.name.starts_with("GSAT"),
            Some(kind) => e.name.contains(kind.as_str()),
            None => true,
        })
        .map(|elements| SatelliteResponse {
            tle_line_one: format!("1 {:05}U 00000A   24001.00000000  .00000000  00000-0  00000-0 0  9999", elements.norad_cat_id),
            tle_line_two: format!("2 {:05}  55.4000 152.1000 0090000  52.7000 308.1000  2.00563000186505", elements.norad_cat_id),
            elements,
        })
        .collect();
    Json(sats)
}

// ---------------------------------------------------------------------------
// Git
// ---------------------------------------------------------------------------

pub(crate) async fn newest_commit(Path((_user, _repo, branch)): Path<(String, String, String)>) -> Json<CommitInfo> {
    let sha = format!("{:0>40}", format!("{:x}", branch.len() * 0x1f2e3d));
    Json(CommitInfo {
        short_sha: sha[..7].to_string(),
        sha,
        timestamp: fixed_time(86_400),
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReleaseParams {
    include_pre_releases: Option<bool>,
    skip: Option<usize>,
    take: Option<usize>,
}

/// Twelve releases, newest first; every fourth one a pre-release.
fn release_history() -> Vec<ReleaseInfo> {
    (0..12)
        .map(|i| {
            let minor = 12 - i;
            ReleaseInfo {
                name: format!("v0.{minor}.0"),
                is_pre_release: i % 4 == 0,
                published_at: fixed_time(0) - TimeDelta::days(14 * i),
                html_url: format!("https://github.com/flybywiresim/a32nx/releases/tag/v0.{minor}.0"),
                body: format!("Release notes for v0.{minor}.0"),
            }
        })
        .collect()
}

pub(crate) async fn releases(Query(q): Query<ReleaseParams>) -> Json<Vec<ReleaseInfo>> {
    let include_pre = q.include_pre_releases.unwrap_or(false);
    let all = release_history()
        .into_iter()
        .filter(|r| include_pre || !r.is_pre_release)
        .skip(q.skip.unwrap_or(0));
    let page = match q.take {
        Some(take) => all.take(take).collect(),
        None => all.collect(),
    };
    Json(page)
}

pub(crate) async fn pulls(Path((_user, _repo)): Path<(String, String)>) -> Json<Vec<PullInfo>> {
    Json(vec![
        PullInfo {
            number: 42,
            title: "feat: mock the FMGC".into(),
            author: "octocat".into(),
            labels: vec![PullLabel {
                id: "1001".into(),
                name: "Ready to Test".into(),
                color: "0e8a16".into(),
            }],
            is_draft: false,
        },
        PullInfo {
            number: 43,
            title: "wip: rework the EFB".into(),
            author: "hubot".into(),
            labels: Vec::new(),
            is_draft: true,
        },
    ])
}

pub(crate) async fn artifact(
    Path((_user, _repo, pull)): Path<(String, String, String)>,
) -> Reply<ArtifactInfo> {
    match pull.as_str() {
        "42" | "43" => Ok(Json(ArtifactInfo {
            artifact_url: format!("https://artifacts.example.invalid/pulls/{pull}.zip"),
        })),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

pub(crate) async fn hoppie(Json(body): Json<Value>) -> Json<HoppieResponse> {
    let kind = body.get("type").and_then(Value::as_str).unwrap_or("ping");
    Json(HoppieResponse {
        response: format!("ok {{{kind}}}"),
    })
}
