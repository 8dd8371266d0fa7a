//! Health check handler for service monitoring.
//!
//! The response shape is a fixed contract consumed by the standalone
//! healthcheck binary and container orchestrators: a JSON object whose
//! `status` field reads `"ok"` when the service can serve traffic.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Health report returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: HealthStatus,
    /// Healthy components, keyed by name.
    pub info: BTreeMap<String, ComponentHealth>,
    /// Failing components, keyed by name.
    pub error: BTreeMap<String, ComponentHealth>,
    /// Every checked component, keyed by name.
    pub details: BTreeMap<String, ComponentHealth>,
}

/// Overall health status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is able to handle requests.
    Ok,
    /// One or more components are failing.
    Error,
}

/// Health status of a single component.
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    /// Component status string, `up` or `down`.
    pub status: String,
}

/// Health check endpoint handler.
///
/// This endpoint is polled frequently by orchestration systems and the
/// container liveness probe, so it avoids expensive operations. The ledger
/// has no external dependencies to check, so the service is healthy
/// whenever it can answer at all and the component maps stay empty.
#[instrument(name = "health_check")]
pub async fn health_check() -> Response {
    debug!("health check requested");

    let response = HealthResponse {
        status: HealthStatus::Ok,
        info: BTreeMap::new(),
        error: BTreeMap::new(),
        details: BTreeMap::new(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
