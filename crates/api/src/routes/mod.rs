pub mod contact;
pub mod health;
pub mod project;
pub mod schema;

use axum::Router;

use crate::state::AppState;

/// Build the complete route tree.
///
/// ```text
/// GET    /                 static greeting
/// GET    /health           service health
/// GET    /test             database diagnostics
/// GET    /schema           record kind schemas
/// GET    /api/hello        static greeting
/// POST   /api/contact      submit an inquiry
/// GET    /api/projects     list projects (?limit=)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(schema::router())
        .merge(contact::router())
        .merge(project::router())
}
