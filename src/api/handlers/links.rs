//! Handlers for linking strategy and related links.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::links::{RelatedLinksRequest, RelatedLinksResponse, StrategyResponse};
use crate::application::services::RelatedLinksQuery;
use crate::domain::entities::EntityRole;
use crate::domain::entity_role::{get_entity_role, get_linking_strategy_by_name, role_info};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the linking strategy of a role.
///
/// # Endpoint
///
/// `GET /api/links/strategy/{role}`
///
/// Unknown roles answer 200 with `known: false` and every category disabled.
pub async fn strategy_handler(Path(role): Path<String>) -> Json<StrategyResponse> {
    let parsed = role.parse::<EntityRole>().ok();

    Json(StrategyResponse {
        strategy: get_linking_strategy_by_name(&role),
        known: parsed.is_some(),
        info: parsed.map(role_info),
        role,
    })
}

/// Builds the related links of a page.
///
/// # Endpoint
///
/// `POST /api/links/related`
///
/// # Request Body
///
/// ```json
/// {
///   "page_type": "airport",
///   "airport_iata": "DEL",
///   "airline_codes": ["AI", "6E"]
/// }
/// ```
///
/// Categories whose candidates cannot be fetched come back empty; blogs are
/// listed under `links.unavailable`.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn related_links_handler(
    State(state): State<AppState>,
    Json(payload): Json<RelatedLinksRequest>,
) -> Result<Json<RelatedLinksResponse>, AppError> {
    payload.validate()?;

    let query: RelatedLinksQuery = payload.into();
    let links = state.link_service.related_links(&query).await;

    Ok(Json(RelatedLinksResponse {
        role: get_entity_role(&query.page_type),
        total: links.total(),
        page_type: query.page_type,
        links,
    }))
}
