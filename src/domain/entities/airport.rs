//! Airport entity as supplied by the data-access layer.

use serde::{Deserialize, Serialize};

/// An airport with its aggregated activity counters.
///
/// `destinations_count` is optional because older records were imported
/// before destination aggregation existed; a missing value is treated the
/// same as zero by the indexing gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub iata: String,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub departure_count: i64,
    #[serde(default)]
    pub arrival_count: i64,
    pub destinations_count: Option<i64>,
    #[serde(default)]
    pub terminals: Vec<String>,
}

impl AirportRecord {
    /// Creates an airport record with zeroed activity.
    pub fn new(iata: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            iata: iata.into(),
            name: name.into(),
            city: None,
            country: None,
            departure_count: 0,
            arrival_count: 0,
            destinations_count: None,
            terminals: Vec::new(),
        }
    }

    /// Total scheduled movements (departures plus arrivals).
    ///
    /// Negative counters count as zero and the sum saturates.
    pub fn total_activity(&self) -> i64 {
        self.departure_count
            .max(0)
            .saturating_add(self.arrival_count.max(0))
    }

    /// Canonical page path for this airport.
    pub fn page_url(&self) -> String {
        format!("/airports/{}", self.iata.to_ascii_lowercase())
    }
}
