use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub mod auth;

/// GET / - liveness banner
pub async fn root() -> &'static str {
    "Backend is running"
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// GET /time - current server time as an ISO-8601 timestamp
pub async fn time() -> Json<Value> {
    Json(json!({ "time": Utc::now() }))
}
