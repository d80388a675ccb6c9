//! Handlers for page quality evaluation.

use axum::Json;

use crate::domain::entities::{PageQualityCheck, PageQualityInput};
use crate::domain::quality_evaluator::{
    AirportPageData, RoutePageData, evaluate_airport_page_quality, evaluate_page_quality,
    evaluate_route_page_quality,
};

/// Scores raw page metrics.
///
/// # Endpoint
///
/// `POST /api/quality/evaluate`
///
/// # Request Body
///
/// ```json
/// {
///   "flights_count": 12,
///   "airlines_count": 3,
///   "distance_available": true,
///   "has_route_data": true
/// }
/// ```
///
/// Missing fields default to zero or `false`.
pub async fn evaluate_quality_handler(
    Json(input): Json<PageQualityInput>,
) -> Json<PageQualityCheck> {
    Json(evaluate_page_quality(&input))
}

/// Scores a route page from its flights, route record, POIs and airlines.
///
/// # Endpoint
///
/// `POST /api/quality/route`
pub async fn route_quality_handler(Json(data): Json<RoutePageData>) -> Json<PageQualityCheck> {
    Json(evaluate_route_page_quality(&data))
}

/// Scores an airport page from its airport record, flights, outbound
/// routes, POIs, terminals and weather availability.
///
/// # Endpoint
///
/// `POST /api/quality/airport`
pub async fn airport_quality_handler(
    Json(data): Json<AirportPageData>,
) -> Json<PageQualityCheck> {
    Json(evaluate_airport_page_quality(&data))
}
