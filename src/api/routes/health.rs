//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// The router only exists once the bulk load has finished, so reaching this
/// handler means the store is ready.
pub async fn readiness(State(_state): State<Arc<AppState>>) -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with load details. Reports `degraded` when the
/// store holds bookings but none of them has a usable arrival date.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.store.stats();

    let status = if stats.rows_loaded > 0 && stats.invalid_dates == stats.rows_loaded {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        bookings: stats.rows_loaded,
        invalid_dates: stats.invalid_dates,
        rows_skipped: stats.rows_skipped,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
