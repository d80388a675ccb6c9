//! Flight, airline and point-of-interest records.

use serde::{Deserialize, Serialize};

/// A single scheduled flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline_code: String,
    pub origin_iata: String,
    pub destination_iata: String,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

impl FlightRecord {
    pub fn new(
        flight_number: impl Into<String>,
        airline_code: impl Into<String>,
        origin_iata: impl Into<String>,
        destination_iata: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            airline_code: airline_code.into(),
            origin_iata: origin_iata.into(),
            destination_iata: destination_iata.into(),
            departure_time: None,
            arrival_time: None,
        }
    }

    pub fn with_departure_time(mut self, time: impl Into<String>) -> Self {
        self.departure_time = Some(time.into());
        self
    }

    /// True when the flight carries a published departure time.
    pub fn has_schedule(&self) -> bool {
        self.departure_time
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

/// An airline from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineRecord {
    pub code: String,
    pub name: String,
    pub country: Option<String>,
}

impl AirlineRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            country: None,
        }
    }
}

/// A point of interest near a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub category: Option<String>,
}
