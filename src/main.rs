use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use formdesk::config::Config;
use formdesk::db::{MongoSubmissionStore, SubmissionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting formdesk");

    // No network I/O here: the client is built on first use, so an unreachable
    // or unresolvable store never keeps the listener from starting
    let store = Arc::new(MongoSubmissionStore::new(
        config.mongo_uri.clone(),
        config.mongo_database.clone(),
    ));

    let startup_store = store.clone();
    tokio::spawn(async move {
        match startup_store.ping().await {
            Ok(()) => {
                tracing::info!("MongoDB connected");
                if let Err(e) = startup_store.ensure_indexes().await {
                    tracing::warn!("Failed to create MongoDB indexes: {e}");
                }
            }
            Err(e) => tracing::error!("MongoDB connection error: {e}"),
        }
    });

    let addr = SocketAddr::new(config.host, config.port);
    let app = formdesk::build_app(store, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
