use std::sync::{Arc, Mutex};

use api::HttpBackend;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::Value;

/// Canned status and JSON body for one route of the stub API.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
}

impl Canned {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A request the stub received.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub id: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug)]
struct StubState {
    fetch: Canned,
    update: Canned,
    role: Canned,
    requests: Vec<Recorded>,
}

/// In-process stand-in for the CGM API. Each route answers with its canned
/// response and records what it was sent.
#[derive(Clone)]
pub struct StubApi {
    state: Arc<Mutex<StubState>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StubState {
                fetch: Canned::ok(sample_case_json()),
                update: Canned::ok(sample_case_json()),
                role: Canned::ok(serde_json::json!({ "role": null, "userId": null })),
                requests: Vec::new(),
            })),
        }
    }

    pub fn with_fetch(self, canned: Canned) -> Self {
        self.state.lock().unwrap().fetch = canned;
        self
    }

    pub fn with_update(self, canned: Canned) -> Self {
        self.state.lock().unwrap().update = canned;
        self
    }

    pub fn with_role(self, canned: Canned) -> Self {
        self.state.lock().unwrap().role = canned;
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    fn record(&self, recorded: Recorded) {
        self.state.lock().unwrap().requests.push(recorded);
    }

    /// Bind to an ephemeral port and return a backend pointed at it.
    pub async fn serve(&self) -> HttpBackend {
        let app = Router::new()
            .route("/api/cases", get(get_case).put(put_case))
            .route("/api/current-user-role", get(get_role))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub API");
        let addr = listener.local_addr().expect("stub API address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub API stopped");
        });

        HttpBackend::new(format!("http://{addr}"))
    }
}

#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

fn respond(canned: Canned) -> impl IntoResponse {
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

async fn get_case(State(stub): State<StubApi>, Query(query): Query<IdQuery>) -> impl IntoResponse {
    stub.record(Recorded {
        method: "GET",
        id: query.id,
        body: None,
    });
    let canned = stub.state.lock().unwrap().fetch.clone();
    respond(canned)
}

async fn put_case(
    State(stub): State<StubApi>,
    Query(query): Query<IdQuery>,
    body: String,
) -> impl IntoResponse {
    stub.record(Recorded {
        method: "PUT",
        id: query.id,
        body: serde_json::from_str(&body).ok(),
    });
    let canned = stub.state.lock().unwrap().update.clone();
    respond(canned)
}

async fn get_role(State(stub): State<StubApi>) -> impl IntoResponse {
    stub.record(Recorded {
        method: "GET",
        id: None,
        body: None,
    });
    let canned = stub.state.lock().unwrap().role.clone();
    respond(canned)
}

/// A case as the backend serialises it: camelCase keys, sparse optionals.
pub fn sample_case_json() -> Value {
    serde_json::json!({
        "id": "c-1",
        "client": "Seguros Caracas",
        "date": "2026-01-20",
        "sinisterNo": "S-4411",
        "idNumber": "V-123",
        "ciTitular": "V-100",
        "ciPatient": "V-123",
        "patientName": "Ana Rojas",
        "patientPhone": "0414-5550000",
        "assignedAnalystId": "u-1",
        "status": "Pendiente",
        "holderCI": "V-100",
        "services": [
            { "name": "Consulta", "type": "Consulta", "amount": 40.0, "attended": false },
            { "name": "Rayos X", "type": "Imagen", "amount": 85.5, "attended": true }
        ],
        "documents": []
    })
}
