//! In-process stand-in for GBIF, OBIS and Nominatim
//!
//! Each endpoint answers with a canned reply and records the decoded query
//! string and User-Agent of every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::header::{CONTENT_TYPE, USER_AGENT};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::config::ProfileConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Endpoint {
    SpeciesMatch,
    SpeciesSearch,
    GbifOccurrences,
    ObisOccurrences,
    Reverse,
}

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Json(Value),
    Status(u16),
    /// Raw body served as application/json
    Body(&'static str),
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) endpoint: Endpoint,
    pub(crate) params: HashMap<String, String>,
    pub(crate) user_agent: Option<String>,
}

struct MockState {
    replies: HashMap<Endpoint, Reply>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    fn respond(
        &self,
        endpoint: Endpoint,
        params: HashMap<String, String>,
        headers: &HeaderMap,
    ) -> Response {
        let user_agent = headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(RecordedRequest {
            endpoint,
            params,
            user_agent,
        });

        match self.replies.get(&endpoint) {
            Some(Reply::Json(value)) => Json(value.clone()).into_response(),
            Some(Reply::Status(code)) => StatusCode::from_u16(*code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response(),
            Some(Reply::Body(body)) => ([(CONTENT_TYPE, "application/json")], *body).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

#[derive(Default)]
pub(crate) struct MockBuilder {
    replies: HashMap<Endpoint, Reply>,
}

impl MockBuilder {
    pub(crate) fn reply(mut self, endpoint: Endpoint, reply: Reply) -> Self {
        self.replies.insert(endpoint, reply);
        self
    }

    pub(crate) fn json(self, endpoint: Endpoint, value: Value) -> Self {
        self.reply(endpoint, Reply::Json(value))
    }

    pub(crate) async fn start(self) -> MockUpstream {
        let state = Arc::new(MockState {
            replies: self.replies,
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route("/v1/species/match", route(Endpoint::SpeciesMatch, &state))
            .route("/v1/species/search", route(Endpoint::SpeciesSearch, &state))
            .route("/v1/occurrence/search", route(Endpoint::GbifOccurrences, &state))
            .route("/obis/v3/occurrence", route(Endpoint::ObisOccurrences, &state))
            .route("/nominatim/reverse", route(Endpoint::Reverse, &state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        MockUpstream { addr, state }
    }
}

fn route(endpoint: Endpoint, state: &Arc<MockState>) -> MethodRouter {
    let state = Arc::clone(state);
    get(
        move |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| async move {
            state.respond(endpoint, params, &headers)
        },
    )
}

pub(crate) struct MockUpstream {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockUpstream {
    pub(crate) fn builder() -> MockBuilder {
        MockBuilder::default()
    }

    /// Config pointing every provider at this mock
    pub(crate) fn config(&self) -> ProfileConfig {
        ProfileConfig {
            gbif_base_url: format!("http://{}/v1", self.addr),
            obis_base_url: format!("http://{}/obis/v3", self.addr),
            nominatim_base_url: format!("http://{}/nominatim", self.addr),
            user_agent: "species-profile-tests/0.1".to_string(),
            ..ProfileConfig::default()
        }
    }

    pub(crate) fn requests(&self, endpoint: Endpoint) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.endpoint == endpoint)
            .cloned()
            .collect()
    }

    pub(crate) fn hits(&self, endpoint: Endpoint) -> usize {
        self.requests(endpoint).len()
    }

    /// Every request in arrival order
    pub(crate) fn sequence(&self) -> Vec<Endpoint> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.endpoint)
            .collect()
    }
}

// Fixtures shaped like real provider responses

pub(crate) fn white_shark_match() -> Value {
    json!({
        "usageKey": 2420694,
        "scientificName": "Carcharodon carcharias (Linnaeus, 1758)",
        "canonicalName": "Carcharodon carcharias",
        "rank": "SPECIES",
        "status": "ACCEPTED",
        "confidence": 99,
        "matchType": "EXACT",
        "kingdom": "Animalia",
        "phylum": "Chordata",
        "order": "Lamniformes",
        "family": "Lamnidae",
        "genus": "Carcharodon",
        "species": "Carcharodon carcharias",
        "class": "Elasmobranchii",
        "synonym": false
    })
}

pub(crate) fn no_match() -> Value {
    json!({
        "confidence": 100,
        "matchType": "NONE",
        "note": "No match because of too little confidence",
        "synonym": false
    })
}

pub(crate) fn tiger_shark_search() -> Value {
    json!({
        "offset": 0,
        "limit": 1,
        "endOfRecords": false,
        "count": 412,
        "results": [{
            "key": 5216933,
            "scientificName": "Galeocerdo cuvier (Péron & Lesueur, 1822)",
            "canonicalName": "Galeocerdo cuvier",
            "rank": "SPECIES",
            "kingdom": "Animalia",
            "phylum": "Chordata",
            "class": "Elasmobranchii"
        }]
    })
}

pub(crate) fn empty_page() -> Value {
    json!({"offset": 0, "limit": 50, "endOfRecords": true, "count": 0, "results": []})
}

pub(crate) fn occurrence_page(records: Vec<Value>) -> Value {
    json!({
        "offset": 0,
        "limit": 50,
        "endOfRecords": false,
        "count": 18734,
        "results": records
    })
}

pub(crate) fn obis_page(records: Vec<Value>) -> Value {
    json!({"total": records.len(), "results": records})
}

pub(crate) fn reverse_country(country: &str) -> Value {
    json!({
        "place_id": 258297568,
        "licence": "Data © OpenStreetMap contributors, ODbL 1.0. http://osm.org/copyright",
        "display_name": country,
        "address": {"country": country, "country_code": "za"}
    })
}
