//! Liveness and readiness probes
//!
//! `/health` never touches the database, so an orchestrator can tell a
//! stuck process (restart it) from a slow database (stop routing to it).

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::UserRepo;
use crate::http::{ApiError, SharedState};

/// Probe response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub status: String,
}

/// GET /health
async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "alive".to_string(),
    })
}

/// GET /ready
async fn ready(State(state): State<SharedState>) -> Result<Json<ProbeResponse>, ApiError> {
    UserRepo::new(&state.pool)
        .ping()
        .await
        .map_err(ApiError::Unavailable)?;

    Ok(Json(ProbeResponse {
        status: "ready".to_string(),
    }))
}

/// Probe routes
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_alive() {
        let Json(body) = health().await;
        assert_eq!(body.status, "alive");
    }
}
