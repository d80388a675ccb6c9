//! DTOs for link strategy and related-link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::RelatedLinksQuery;
use crate::domain::entities::{EntityRole, LinkingStrategy, RelatedLinks, RoleInfo};

/// Linking strategy of a role name.
///
/// Unknown role names get a strategy that links nothing; `known` tells the
/// two cases apart.
#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    pub role: String,
    pub known: bool,
    pub strategy: LinkingStrategy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<RoleInfo>,
}

/// Entities a page references, used to build its related links.
#[derive(Debug, Deserialize, Validate)]
pub struct RelatedLinksRequest {
    #[validate(length(min = 1, max = 32))]
    pub page_type: String,

    /// Airport whose departing routes are linked.
    #[validate(length(equal = 3, message = "IATA code must be 3 characters"))]
    pub airport_iata: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub airport_iatas: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub airline_codes: Vec<String>,
}

impl From<RelatedLinksRequest> for RelatedLinksQuery {
    fn from(req: RelatedLinksRequest) -> Self {
        Self {
            page_type: req.page_type,
            airport_iata: req.airport_iata.map(|iata| iata.to_ascii_uppercase()),
            airport_iatas: req
                .airport_iatas
                .into_iter()
                .map(|iata| iata.to_ascii_uppercase())
                .collect(),
            airline_codes: req
                .airline_codes
                .into_iter()
                .map(|code| code.to_ascii_uppercase())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelatedLinksResponse {
    pub page_type: String,
    pub role: EntityRole,
    pub total: usize,
    pub links: RelatedLinks,
}
