//! Handler for content duplicate detection.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::duplicate::{DuplicateCheckRequest, DuplicateCheckResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Records a page's content signature and reports whether it was seen
/// before for the same page type.
///
/// # Endpoint
///
/// `POST /api/content/duplicate`
///
/// # Request Body
///
/// ```json
/// { "page_type": "airport", "content": "Delhi airport has 42 daily departures" }
/// ```
///
/// or with a precomputed hash:
///
/// ```json
/// { "page_type": "airport", "hash": "3f1c9a0b7d2e4c11" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if neither `content` nor `hash` is given.
pub async fn duplicate_check_handler(
    State(state): State<AppState>,
    Json(payload): Json<DuplicateCheckRequest>,
) -> Result<Json<DuplicateCheckResponse>, AppError> {
    payload.validate()?;

    let service = &state.duplicate_service;
    let (hash, is_duplicate) = match (payload.content, payload.hash) {
        (Some(content), _) => service.check_duplicate(&payload.page_type, &content).await,
        (None, Some(hash)) => {
            let is_duplicate = service
                .check_content_duplicate(&payload.page_type, &hash)
                .await;
            (hash, is_duplicate)
        }
        (None, None) => {
            return Err(AppError::bad_request(
                "Either content or hash is required",
                json!({ "fields": ["content", "hash"] }),
            ));
        }
    };

    Ok(Json(DuplicateCheckResponse {
        page_type: payload.page_type,
        hash,
        is_duplicate,
    }))
}
