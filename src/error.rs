use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;

/// Errors surfaced at the HTTP boundary. Causes are logged; clients only
/// ever see a fixed message.
#[derive(Debug)]
pub enum AppError {
    SaveFailed(StoreError),
    FetchFailed(StoreError),
    NotFound,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::SaveFailed(err) => write!(f, "Error saving form: {err}"),
            AppError::FetchFailed(err) => write!(f, "Error fetching forms: {err}"),
            AppError::NotFound => write!(f, "Not Found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::SaveFailed(_) => {
                tracing::error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save form data")
            }
            AppError::FetchFailed(_) => {
                tracing::error!("{self}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch forms")
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        };

        let body = json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}
