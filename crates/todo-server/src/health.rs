//! `GET /health` — readiness probe backed by a database round trip.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use todo_core::envelope::ApiResponse;

use crate::errors::ApiError;
use crate::server::AppState;

/// Health payload: one entry per probed dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
    /// Database probe result.
    pub database: DependencyStatus,
}

/// Status of a single dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// `"up"` when the probe succeeded.
    pub status: String,
}

/// Probe the database and report per-dependency status.
///
/// A failed probe responds `503` with the message `database: down`; the
/// underlying error only goes to the log.
#[instrument(skip_all, fields(endpoint = "health"))]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthData>>, ApiError> {
    match state.tasks.ping() {
        Ok(status) => Ok(Json(ApiResponse::success(HealthData {
            database: DependencyStatus { status },
        }))),
        Err(e) => {
            tracing::error!(error = %e, "database ping failed");
            Err(ApiError::Unavailable {
                message: "database: down".to_string(),
            })
        }
    }
}
