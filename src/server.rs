//! HTTP server initialization and runtime setup.
//!
//! Wires the storage, extraction and generation components together and
//! manages the Axum server lifecycle.

use crate::application::services::{KeywordGenerator, ShortenService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::llm::OpenAiCompletionClient;
use crate::infrastructure::metadata::HttpMetadataExtractor;
use crate::infrastructure::persistence::{self, SqliteLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (database file created if missing)
/// - `urls` table
/// - Page metadata extractor
/// - Completion client and keyword generator
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or initialized
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout(),
    )
    .await
    .context("Failed to open database")?;
    tracing::info!("Connected to database");

    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    link_repository
        .initialize()
        .await
        .context("Failed to initialize storage")?;
    tracing::info!("Storage initialized");

    let extractor = HttpMetadataExtractor::new(config.fetch_timeout(), &config.fetch_user_agent)
        .context("Failed to build HTTP client")?;

    let completion_client = OpenAiCompletionClient::from_app_config(&config);
    let generator = KeywordGenerator::new(Arc::new(completion_client), config.generation_timeout());

    let shorten_service = ShortenService::new(Arc::new(extractor), generator, link_repository);
    let state = AppState::new(Arc::new(shorten_service));

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
