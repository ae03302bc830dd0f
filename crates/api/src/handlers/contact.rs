//! Handler for contact-form submissions.

use axum::extract::State;
use axum::Json;
use folio_core::inquiry::INQUIRY_SCHEMA;
use folio_core::Inquiry;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Body returned once an inquiry is stored.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub status: &'static str,
    pub id: String,
}

/// POST /api/contact
///
/// Validation runs before the store is consulted, so an invalid payload is
/// rejected with 422 even when persistence is disabled. A body that is not
/// JSON is also a 422. A disabled store or a failed write answers 500.
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Value>,
) -> AppResult<Json<CreatedResponse>> {
    let Value::Object(data) = payload else {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".into(),
        ));
    };

    let inquiry = Inquiry::from_map(&data)?;
    if !inquiry.has_known_service() {
        tracing::debug!(service = %inquiry.service, "Inquiry for an unlisted service");
    }

    let id = state
        .store
        .create_document(INQUIRY_SCHEMA.collection, &inquiry)
        .await?;
    tracing::info!(%id, "Inquiry stored");

    Ok(Json(CreatedResponse { status: "ok", id }))
}
