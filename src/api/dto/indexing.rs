//! DTOs for the indexing eligibility endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{
    AirportRecord, FlightRecord, IndexingCheck, PageQualityCheck, PageQualityInput, RouteRecord,
};
use crate::domain::indexing_gate::IndexingSubject;
use crate::error::AppError;

/// Page data to run through an activity gate.
///
/// `route` is read for `route` and `airline-route` pages, `airport` for
/// `airport` and `airline-airport` pages. When `quality` is present the
/// response also carries the two-stage publish decision.
#[derive(Debug, Deserialize, Validate)]
pub struct IndexingCheckRequest {
    #[validate(length(min = 1, max = 32))]
    pub page_type: String,

    #[serde(default)]
    #[validate(length(max = 10000))]
    pub flights: Vec<FlightRecord>,

    pub route: Option<RouteRecord>,

    pub airport: Option<AirportRecord>,

    pub quality: Option<PageQualityInput>,
}

impl IndexingCheckRequest {
    /// Borrows the request as the gate subject of its page type.
    ///
    /// # Errors
    ///
    /// Returns 400 Bad Request for a page type without a gate.
    pub fn subject(&self) -> Result<IndexingSubject<'_>, AppError> {
        let flights = self.flights.as_slice();
        let route = self.route.as_ref();
        let airport = self.airport.as_ref();

        match self.page_type.as_str() {
            "route" => Ok(IndexingSubject::Route { flights, route }),
            "airport" => Ok(IndexingSubject::Airport { airport, flights }),
            "airline-route" => Ok(IndexingSubject::AirlineRoute { flights, route }),
            "airline-airport" => Ok(IndexingSubject::AirlineAirport { flights, airport }),
            other => Err(AppError::bad_request(
                "Unsupported page type",
                json!({
                    "page_type": other,
                    "supported": ["route", "airport", "airline-route", "airline-airport"],
                }),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndexingCheckResponse {
    pub page_type: String,

    #[serde(flatten)]
    pub indexing: IndexingCheck,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<PageQualityCheck>,

    /// Indexing gate AND quality check; present only with `quality`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishable: Option<bool>,
}
