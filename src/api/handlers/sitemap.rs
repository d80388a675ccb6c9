//! Handler for sitemap inclusion and priority.

use axum::Json;
use validator::Validate;

use crate::api::dto::sitemap::{SitemapEntryRequest, SitemapEntryResponse};
use crate::domain::entity_role::{get_entity_role, get_sitemap_priority, should_include_in_sitemap};
use crate::error::AppError;

/// Decides whether a page is listed in the sitemap and at which priority.
///
/// # Endpoint
///
/// `POST /api/sitemap/entry`
pub async fn sitemap_entry_handler(
    Json(payload): Json<SitemapEntryRequest>,
) -> Result<Json<SitemapEntryResponse>, AppError> {
    payload.validate()?;

    let role = get_entity_role(&payload.page_type);

    Ok(Json(SitemapEntryResponse {
        include: should_include_in_sitemap(role, payload.should_index, payload.quality_score),
        priority: get_sitemap_priority(role, payload.quality_score),
        page_type: payload.page_type,
        role,
    }))
}
