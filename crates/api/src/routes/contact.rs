use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// ```text
/// POST /api/contact -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(contact::create))
}
