//! Shared test fixtures for the covmap integration tests.
//!
//! Provides canned API payloads shaped like disease.sh responses, a
//! `snapshot()` shorthand for ranking tests, and `StubServer`, an axum app
//! on a loopback port that serves the canned payloads.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use covmap::{CovmapClient, RegionSnapshot};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::thread;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

pub fn world_json() -> Value {
    json!({
        "updated": 1_680_000_000_000_i64,
        "cases": 683_000_000,
        "todayCases": 12_345,
        "deaths": 6_830_000,
        "todayDeaths": 210,
        "recovered": 656_000_000,
        "todayRecovered": 0,
        "active": 20_170_000,
        "critical": 39_000,
        "casesPerOneMillion": 87_620,
        "population": 7_900_000_000_i64,
        "affectedCountries": 231
    })
}

pub fn usa_json() -> Value {
    json!({
        "updated": 1_680_000_000_000_i64,
        "country": "USA",
        "countryInfo": {
            "_id": 840,
            "iso2": "US",
            "iso3": "USA",
            "lat": 38.0,
            "long": -97.0,
            "flag": "https://disease.sh/assets/img/flags/us.png"
        },
        "cases": 106_000_000,
        "todayCases": 500,
        "deaths": 1_150_000,
        "todayDeaths": 7,
        "recovered": 104_000_000,
        "todayRecovered": 450,
        "active": 850_000,
        "critical": 1_800,
        "population": 334_800_000,
        "continent": "North America"
    })
}

pub fn countries_json() -> Value {
    json!([
        {
            "country": "Brazil",
            "countryInfo": {"_id": 76, "iso2": "BR", "iso3": "BRA", "lat": -10.0, "long": -55.0,
                            "flag": "https://disease.sh/assets/img/flags/br.png"},
            "cases": 37_000_000, "todayCases": 0, "deaths": 700_000, "todayDeaths": 0,
            "recovered": 36_000_000, "todayRecovered": 0, "continent": "South America"
        },
        usa_json(),
        {
            "country": "Diamond Princess",
            "countryInfo": {"_id": null, "iso2": null, "iso3": null, "lat": 35.4437, "long": 139.638,
                            "flag": "https://disease.sh/assets/img/flags/unknown.png"},
            "cases": 712, "todayCases": 0, "deaths": 13, "todayDeaths": 0,
            "recovered": 699, "todayRecovered": 0, "continent": ""
        },
        {
            "country": "India",
            "countryInfo": {"_id": 356, "iso2": "IN", "iso3": "IND", "lat": 20.0, "long": 77.0,
                            "flag": "https://disease.sh/assets/img/flags/in.png"},
            "cases": 44_700_000, "todayCases": 1_200, "deaths": 530_000, "todayDeaths": 3,
            "recovered": null, "todayRecovered": null, "continent": "Asia"
        }
    ])
}

/// Worldwide history with three dates, delivered chronologically.
pub fn history_all_json() -> Value {
    json!({
        "cases": {"1/1/21": 100, "1/2/21": 150, "1/3/21": 170},
        "deaths": {"1/1/21": 10, "1/2/21": 12, "1/3/21": 15},
        "recovered": {"1/1/21": 0, "1/2/21": 40, "1/3/21": 90}
    })
}

pub fn usa_history_json() -> Value {
    json!({
        "country": "USA",
        "province": ["mainland"],
        "timeline": {
            "cases": {"3/8/23": 103_800_000, "3/9/23": 103_802_000},
            "deaths": {"3/8/23": 1_123_000, "3/9/23": 1_123_050},
            "recovered": {"3/8/23": 0, "3/9/23": 0}
        }
    })
}

pub fn not_found_json() -> Value {
    json!({"message": "Country not found or doesn't have any cases"})
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A region snapshot with only a name and a case total.
pub fn snapshot(name: &str, cases: Option<i64>) -> RegionSnapshot {
    serde_json::from_value(json!({ "country": name, "cases": cases })).unwrap()
}

pub fn countries() -> Vec<RegionSnapshot> {
    serde_json::from_value(countries_json()).unwrap()
}

pub fn names(records: &[RegionSnapshot]) -> Vec<&str> {
    records.iter().map(|r| r.name()).collect()
}

// ---------------------------------------------------------------------------
// StubServer
// ---------------------------------------------------------------------------

/// Route table entry: request target (path plus query), status, JSON body.
pub type Route = (&'static str, u16, String);

/// The usual routes: everything the dashboard reads, plus a 404 region.
pub fn default_routes() -> Vec<Route> {
    vec![
        ("/all", 200, world_json().to_string()),
        ("/countries", 200, countries_json().to_string()),
        ("/countries/USA", 200, usa_json().to_string()),
        ("/countries/Atlantis", 404, not_found_json().to_string()),
        ("/historical/all?lastdays=120", 200, history_all_json().to_string()),
        ("/historical/USA?lastdays=120", 200, usa_history_json().to_string()),
        ("/broken", 500, "{}".to_string()),
        ("/garbled", 200, "not json".to_string()),
    ]
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Vec<Route>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Answers every target from the route table; unknown targets get a 404
/// with an empty JSON object.
async fn respond(State(stub): State<StubState>, uri: Uri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();
    stub.requests.lock().unwrap().push(target.clone());

    let (status, body) = stub
        .routes
        .iter()
        .find(|(path, _, _)| *path == target)
        .map(|(_, status, body)| (*status, body.clone()))
        .unwrap_or((404, "{}".to_string()));
    let status = StatusCode::from_u16(status).unwrap();

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// The route table served by an axum app on its own runtime thread, so
/// blocking clients and `#[tokio::test]`s can both talk to it.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(respond).with_state(StubState {
            routes: Arc::new(routes),
            requests: requests.clone(),
        });

        // Bound up front so the port is known before the runtime starts.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Request targets received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// A blocking client pointed at this server.
    pub fn client(&self) -> CovmapClient {
        CovmapClient::builder()
            .api_base(&self.base_url)
            .system_proxy(false)
            .build()
            .unwrap()
    }
}
