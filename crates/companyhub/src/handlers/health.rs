//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (round-trips a query through the store)

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::ApiError;
use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the store answers, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state
        .company_repo
        .ping()
        .await
        .map_err(|e| ApiError::Unavailable(format!("Store unavailable: {e}")))?;

    Ok(Json(json!({ "ready": true })))
}
