use std::sync::Arc;

use folio_db::StoreHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Document store handle. Disabled when no database could be reached at startup.
    pub store: StoreHandle,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
