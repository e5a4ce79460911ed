pub mod assets;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod notify;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::SubmissionStore;
use crate::notify::SlackNotifier;
use crate::state::{AppState, SharedState};

pub fn build_app(store: Arc<dyn SubmissionStore>, config: Config) -> Router {
    let notifier = SlackNotifier::new(config.slack.clone());
    if notifier.is_configured() {
        tracing::info!("Slack notifications enabled");
    } else {
        tracing::warn!("Slack not configured, submission notifications disabled");
    }

    let state: SharedState = Arc::new(AppState {
        store,
        notifier: Arc::new(notifier),
    });

    // API routes first so the asset fallback never shadows them
    let mut app = Router::new().merge(routes::api_routes());

    if config.static_dir.is_dir() {
        tracing::info!("Serving frontend from {}", config.static_dir.display());
        app = app.fallback_service(assets::spa_service(&config.static_dir));
    } else {
        tracing::warn!(
            "Static directory {} not found, serving API only",
            config.static_dir.display()
        );
        app = app.route("/", get(routes::health::banner));
    }

    app.layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}
