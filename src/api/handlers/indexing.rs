//! Handler for indexing eligibility checks.

use axum::Json;
use tracing::debug;
use validator::Validate;

use crate::api::dto::indexing::{IndexingCheckRequest, IndexingCheckResponse};
use crate::domain::entities::is_publishable;
use crate::domain::indexing_gate::check_indexing_eligibility;
use crate::domain::quality_evaluator::evaluate_page_quality;
use crate::error::AppError;

/// Runs the activity gate of the requested page type.
///
/// # Endpoint
///
/// `POST /api/indexing/check`
///
/// # Request Body
///
/// ```json
/// {
///   "page_type": "route",
///   "flights": [{ "flight_number": "AI101", "airline_code": "AI",
///                 "origin_iata": "DEL", "destination_iata": "BOM" }],
///   "route": { "origin_iata": "DEL", "destination_iata": "BOM",
///              "has_flight_data": true, "flights_per_day": "3 flights" }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid body or a page type without a gate.
pub async fn indexing_check_handler(
    Json(payload): Json<IndexingCheckRequest>,
) -> Result<Json<IndexingCheckResponse>, AppError> {
    payload.validate()?;

    let subject = payload.subject()?;
    let indexing = check_indexing_eligibility(subject);

    let quality = payload.quality.as_ref().map(evaluate_page_quality);
    let publishable = quality.as_ref().map(|q| is_publishable(&indexing, q));

    debug!(
        page_type = %payload.page_type,
        should_index = indexing.should_index,
        reason = ?indexing.reason,
        "Indexing check"
    );

    Ok(Json(IndexingCheckResponse {
        page_type: payload.page_type.clone(),
        indexing,
        quality,
        publishable,
    }))
}
