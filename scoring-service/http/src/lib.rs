use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use scoring_application::ScoringCommandService;
use scoring_configuration::ServerConfig;

pub mod error;
pub mod handlers;

pub use error::{error_mapper, HttpError};
pub use handlers::*;

#[derive(Clone)]
pub struct AppState {
    pub command_service: Arc<ScoringCommandService>,
}

impl AppState {
    pub fn new(command_service: Arc<ScoringCommandService>) -> Self {
        Self { command_service }
    }
}

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    let analyze_route = post(analyze_voice).layer(DefaultBodyLimit::max(max_upload_bytes));

    Router::new()
        .route("/health", get(health_check))
        .route("/analyze-voice", analyze_route)
        .with_state(state)
}

pub async fn serve_http(router: Router, config: &ServerConfig) -> anyhow::Result<()> {
    let bind = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind HTTP listener on `{bind}`"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to read HTTP listener address")?;

    tracing::info!(address = %local_addr, "voice scoring HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("voice scoring HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
