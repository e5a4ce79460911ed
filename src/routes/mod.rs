pub mod health;
pub mod submissions;

use axum::routing::{any, get};
use axum::Router;

use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/forms",
            get(submissions::list).post(submissions::create),
        )
        // Unknown API paths must not reach the SPA fallback
        .route("/api", any(not_found))
        .route("/api/", any(not_found))
        .route("/api/{*rest}", any(not_found))
}

async fn not_found() -> AppError {
    AppError::NotFound
}
