//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters of `GET /api/projects` (`?limit=`).
///
/// The value is resolved with `folio_core::limits::resolve_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub limit: Option<i64>,
}
