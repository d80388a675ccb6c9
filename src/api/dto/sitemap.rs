//! DTOs for the sitemap entry endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::EntityRole;

#[derive(Debug, Deserialize, Validate)]
pub struct SitemapEntryRequest {
    #[validate(length(min = 1, max = 32))]
    pub page_type: String,

    pub should_index: bool,

    #[serde(default)]
    pub quality_score: u32,
}

#[derive(Debug, Serialize)]
pub struct SitemapEntryResponse {
    pub page_type: String,
    pub role: EntityRole,
    pub include: bool,
    pub priority: f64,
}
