//! HTTP layer
//!
//! Axum server with:
//! - CORS restricted to the local frontend origins, credentials allowed
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError, SharedState};
