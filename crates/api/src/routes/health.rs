use axum::routing::get;
use axum::Router;

use crate::handlers::{diagnostics, health};
use crate::state::AppState;

/// Greeting, health and diagnostic probes.
///
/// ```text
/// GET /            -> root
/// GET /api/hello   -> hello
/// GET /health      -> health_check
/// GET /test        -> diagnostics::database
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/api/hello", get(health::hello))
        .route("/health", get(health::health_check))
        .route("/test", get(diagnostics::database))
}
