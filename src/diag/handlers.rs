//! Liveness and store-diagnostics handlers

use crate::store::SharedState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

/// How many collection names the diagnostics report lists at most
const MAX_COLLECTIONS: usize = 10;

/// How much driver error text the diagnostics report keeps
const MAX_ERROR_CHARS: usize = 50;

/// Creates routes for liveness and diagnostics
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
        .route("/test", get(test_store))
}

/// Endpoint: GET /
async fn read_root() -> Json<Value> {
    Json(json!({ "message": "Toy Store Backend Running" }))
}

/// Endpoint: GET /api/hello
async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the Toy Store API!" }))
}

/// Endpoint: GET /test
/// Reports store connectivity and a truncated list of collection names.
/// Every failure is caught and surfaced as a descriptive string; this
/// endpoint never returns an HTTP error.
async fn test_store(State(state): State<SharedState>) -> Json<Value> {
    let mut report = json!({
        "backend": "Running",
        "database": "Not Available",
        "database_url": env_presence("DATABASE_URL"),
        "database_name": env_presence("DATABASE_NAME"),
        "connection_status": "Not Connected",
        "collections": [],
    });

    if state.store.is_connected() {
        report["database"] = "Available".into();
        report["connection_status"] = "Connected".into();

        match state.store.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_COLLECTIONS);
                report["collections"] = collections.into();
                report["database"] = "Connected & Working".into();
            }
            Err(err) => {
                let detail: String = err.to_string().chars().take(MAX_ERROR_CHARS).collect();
                report["database"] = format!("Connected but Error: {detail}").into();
            }
        }
    }

    Json(report)
}

/// Renders whether an environment variable is present, without leaking
/// its value.
fn env_presence(name: &str) -> Value {
    if std::env::var(name).is_ok() {
        "Set".into()
    } else {
        "Not Set".into()
    }
}
