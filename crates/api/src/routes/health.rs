use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok`, or `degraded` when run history is
    /// configured but the database is unreachable.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Run-history state: `disabled`, `ok` or `degraded`.
    pub run_log: &'static str,
}

/// GET /health -- returns service and run-history health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let run_log = match &state.pool {
        None => "disabled",
        Some(pool) => match rulecheck_db::health_check(pool).await {
            Ok(()) => "ok",
            Err(e) => {
                tracing::warn!(error = %e, "Run log database health check failed");
                "degraded"
            }
        },
    };

    let status = if run_log == "degraded" { "degraded" } else { "ok" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        run_log,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
