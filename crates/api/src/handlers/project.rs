//! Handler for the public project listing.

use axum::extract::{Query, State};
use axum::Json;
use folio_core::limits::{resolve_limit, DEFAULT_PROJECT_LIMIT};
use folio_core::project::PROJECT_SCHEMA;
use folio_core::Project;
use folio_db::Document;

use crate::query::ProjectListParams;
use crate::state::AppState;

/// GET /api/projects?limit=9
///
/// Never fails: a disabled store or a failed query yields `[]`. Every
/// returned project carries all five fields.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Json<Vec<Project>> {
    let limit = resolve_limit(params.limit, DEFAULT_PROJECT_LIMIT);
    let docs = state
        .store
        .get_documents_or_empty(PROJECT_SCHEMA.collection, &Document::new(), limit)
        .await;

    Json(docs.iter().map(Project::normalize).collect())
}
