//! Route entities: persisted routes and lightweight link candidates.

use serde::{Deserialize, Serialize};

/// A directed origin → destination route with its aggregated schedule data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin_iata: String,
    pub destination_iata: String,
    pub origin_city: Option<String>,
    pub destination_city: Option<String>,
    pub distance_km: Option<f64>,
    pub average_duration: Option<String>,
    /// Human readable frequency such as `"3-4 flights"`.
    pub flights_per_day: Option<String>,
    #[serde(default)]
    pub has_flight_data: bool,
}

impl RouteRecord {
    /// Creates a route with no schedule data attached.
    pub fn new(origin_iata: impl Into<String>, destination_iata: impl Into<String>) -> Self {
        Self {
            origin_iata: origin_iata.into(),
            destination_iata: destination_iata.into(),
            origin_city: None,
            destination_city: None,
            distance_km: None,
            average_duration: None,
            flights_per_day: None,
            has_flight_data: false,
        }
    }

    /// Returns true when an average duration string is present and non-blank.
    pub fn has_duration(&self) -> bool {
        self.average_duration
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    /// Canonical page path, e.g. `/flights/del-bom`.
    pub fn page_url(&self) -> String {
        route_page_url(&self.origin_iata, &self.destination_iata)
    }
}

/// Builds the canonical route page path from two IATA codes.
pub fn route_page_url(origin_iata: &str, destination_iata: &str) -> String {
    format!(
        "/flights/{}-{}",
        origin_iata.to_ascii_lowercase(),
        destination_iata.to_ascii_lowercase()
    )
}

/// A route reachable from an airport, as returned for related-link building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub origin_iata: String,
    pub destination_iata: String,
    #[serde(default)]
    pub has_flight_data: bool,
    pub destination_city: Option<String>,
    pub flights_per_day: Option<String>,
}

impl RouteCandidate {
    pub fn new(
        origin_iata: impl Into<String>,
        destination_iata: impl Into<String>,
        has_flight_data: bool,
    ) -> Self {
        Self {
            origin_iata: origin_iata.into(),
            destination_iata: destination_iata.into(),
            has_flight_data,
            destination_city: None,
            flights_per_day: None,
        }
    }

    pub fn with_destination_city(mut self, city: impl Into<String>) -> Self {
        self.destination_city = Some(city.into());
        self
    }
}

/// Filter applied when sampling routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteFilter {
    pub has_flight_data: Option<bool>,
}

impl RouteFilter {
    /// Only routes flagged as carrying flight data.
    pub fn with_flight_data() -> Self {
        Self {
            has_flight_data: Some(true),
        }
    }
}
