use axum::routing::get;
use axum::Router;

use crate::handlers::schema;
use crate::state::AppState;

/// ```text
/// GET /schema -> describe
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/schema", get(schema::describe))
}
