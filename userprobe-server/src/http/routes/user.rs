//! Current user endpoint

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::UserRepo;
use crate::http::{ApiError, SharedState};

/// Reported when the `users` table has no rows
pub const UNKNOWN_USER: &str = "Unknown";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub name: String,
}

impl UserResponse {
    fn from_first_name(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| UNKNOWN_USER.to_string()),
        }
    }
}

/// GET /user
async fn current_user(State(state): State<SharedState>) -> Result<Json<UserResponse>, ApiError> {
    let name = UserRepo::new(&state.pool).first_name().await?;
    Ok(Json(UserResponse::from_first_name(name)))
}

/// User routes
pub fn router() -> Router<SharedState> {
    Router::new().route("/user", get(current_user))
}
