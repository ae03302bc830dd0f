//! Schema explorer.

use std::collections::BTreeMap;

use axum::Json;
use folio_core::RECORD_SCHEMAS;
use schemars::schema::RootSchema;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub collections: Vec<&'static str>,
    /// JSON Schema of each record kind, keyed by record name.
    pub models: BTreeMap<&'static str, RootSchema>,
}

/// GET /schema
pub async fn describe() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        collections: RECORD_SCHEMAS.iter().map(|s| s.collection).collect(),
        models: RECORD_SCHEMAS
            .iter()
            .map(|s| (s.name, s.json_schema()))
            .collect(),
    })
}
