//! Application setup and server lifecycle

use super::routes::{health_handler, redact_handler, scan_handler};
use crate::anonymization::AnonymizationEngine;
use crate::config::ServerConfig;
use crate::domain::{RedactorError, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnonymizationEngine>,
}

/// Build the application router
pub fn build_app(engine: Arc<AnonymizationEngine>, config: &ServerConfig) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/health", get(health_handler))
        .route("/scan", post(scan_handler))
        .route("/redact", post(redact_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_seconds),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until `shutdown` resolves
///
/// # Errors
///
/// Returns a server error if the address cannot be bound or serving fails.
pub async fn serve<F>(
    engine: Arc<AnonymizationEngine>,
    config: &ServerConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(engine, config);
    let addr = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RedactorError::Server(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RedactorError::Server(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}
