//! API error types with IntoResponse
//!
//! The underlying database error is logged and never sent to the client.
//! Bodies use a `detail` key, the shape the existing frontend reads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Dependency not ready (503, logged)
    Unavailable(DbError),

    /// Database error while serving a request (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::Unavailable(e) => {
                tracing::warn!("Readiness check failed: {}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
