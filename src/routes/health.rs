use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Served at `/` when no frontend bundle is mounted.
pub async fn banner() -> &'static str {
    "API is running..."
}
