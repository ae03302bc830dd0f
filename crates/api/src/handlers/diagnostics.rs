//! Database diagnostic probe.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Diagnostic report of `GET /test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    /// One of the [`folio_db::DatabaseStatus`] renderings.
    pub database: String,
    /// Whether `DATABASE_URL` is set.
    pub database_url: &'static str,
    /// Whether `DATABASE_NAME` is set.
    pub database_name: &'static str,
    pub connection_status: &'static str,
    /// Up to 10 collection names.
    pub collections: Vec<String>,
}

/// GET /test
///
/// Never fails: every store problem is folded into the `database` string.
pub async fn database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let status = state.store.probe().await;
    tracing::debug!(database = %status, "Database probe finished");

    let database = &state.config.database;
    Json(DiagnosticsResponse {
        backend: "Running",
        database: status.to_string(),
        database_url: set_or_not(database.url.is_some()),
        database_name: set_or_not(database.name.is_some()),
        connection_status: if status.is_connected() {
            "Connected"
        } else {
            "Not Connected"
        },
        collections: status.collections().to_vec(),
    })
}

fn set_or_not(set: bool) -> &'static str {
    if set {
        "Set"
    } else {
        "Not Set"
    }
}
