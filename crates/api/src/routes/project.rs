use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET /api/projects -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/api/projects", get(project::list))
}
