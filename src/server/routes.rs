//! Route handlers

use super::{app::AppState, error::ApiError};
use crate::anonymization::{RedactReport, RedactRequest, ScanReport, ScanRequest};
use crate::log_request_rejected;
use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    ok: bool,
}

/// Liveness probe; never touches the engine
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// `POST /scan`
pub async fn scan_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ScanReport>, ApiError> {
    let request = ScanRequest::from_json_body(&body);
    let report = state.engine.scan(&request).inspect_err(|e| {
        if e.is_client_error() {
            log_request_rejected!("scan", e);
        }
    })?;
    Ok(Json(report))
}

/// `POST /redact`
pub async fn redact_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RedactReport>, ApiError> {
    let request = RedactRequest::from_json_body(&body);
    let report = state.engine.redact(&request).inspect_err(|e| {
        if e.is_client_error() {
            log_request_rejected!("redact", e);
        }
    })?;
    Ok(Json(report))
}
