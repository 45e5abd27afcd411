//! Container identity endpoint

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::SharedState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ContainerResponse {
    pub container_id: String,
}

/// GET /container
async fn container(State(state): State<SharedState>) -> Json<ContainerResponse> {
    Json(ContainerResponse {
        container_id: state.container_id.clone(),
    })
}

/// Container routes
pub fn router() -> Router<SharedState> {
    Router::new().route("/container", get(container))
}
