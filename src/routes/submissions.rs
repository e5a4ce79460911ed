use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::db::StoreError;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::submission::{coerce, parse_body};

const NEW_SUBMISSION_TITLE: &str = "New form submission";

pub async fn create(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let raw = parse_body(&body);
    let submission = coerce::cast(&raw).map_err(|e| AppError::SaveFailed(StoreError::from(e)))?;

    let stored = state
        .store
        .create(submission)
        .await
        .map_err(AppError::SaveFailed)?;

    tracing::debug!(id = %stored.id, "Form saved");
    notify_new_submission(&state, &stored);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Form saved successfully!" })),
    ))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.store.list_all().await.map_err(AppError::FetchFailed)?;
    Ok(Json(submissions))
}

/// Fire-and-forget Slack notice for a stored submission. Never delays or
/// fails the response.
fn notify_new_submission(state: &SharedState, stored: &Submission) {
    if !state.notifier.is_configured() {
        return;
    }

    let mut fields = stored.fields.summary();
    fields.push(("createdAt".to_string(), stored.created_at.to_rfc3339()));

    let notifier = state.notifier.clone();
    tokio::spawn(async move {
        notifier.notify_rich(NEW_SUBMISSION_TITLE, &fields).await;
    });
}
