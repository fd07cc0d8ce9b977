//! Server startup: shared state initialization and the listener loop.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use reviewlens_core::config::SentimentConfig;
use reviewlens_core::Config;
use reviewlens_sentiment::{LexiconScorer, SentimentScorer, VaderScorer};
use reviewlens_storage::ReviewStore;

use crate::router::build_router;
use crate::state::AppState;

/// Build the configured sentiment scorer: a lexicon file when one is set,
/// otherwise the full VADER scorer.
pub fn build_scorer(config: &SentimentConfig) -> anyhow::Result<Arc<dyn SentimentScorer>> {
    match &config.lexicon_path {
        Some(path) => {
            let scorer = LexiconScorer::from_file(path)
                .with_context(|| format!("Failed to load sentiment lexicon from {}", path.display()))?;
            Ok(Arc::new(scorer))
        }
        None => {
            info!("Using built-in VADER sentiment scorer");
            Ok(Arc::new(VaderScorer::new()))
        }
    }
}

/// Load the seed CSV and scorer into shared state. Any failure aborts startup.
pub async fn build_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let scorer = build_scorer(&config.sentiment)?;
    let path = &config.storage.reviews_csv;
    let store = ReviewStore::load(path)
        .with_context(|| format!("Failed to load reviews from {}", path.display()))?;
    info!("Review store ready with {} reviews", store.len().await);
    Ok(AppState::new(store, scorer))
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = build_app_state(config).await?;
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);
    info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
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
    info!("Shutdown signal received");
}
