//! Static greetings and the service health probe.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// `{ "message": ... }` payload of the greeting endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from FastAPI Backend!",
    })
}

/// GET /api/hello
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the store is reachable, `degraded` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Human-readable store status.
    pub db: String,
}

/// GET /health -- returns service and store health.
///
/// Always answers 200; a disabled or failing store only degrades the status.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = state.store.probe().await;
    let status = if matches!(db, folio_db::DatabaseStatus::Connected { .. }) {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db: db.to_string(),
    })
}
