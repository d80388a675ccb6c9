//! Activity gates deciding whether an entity has enough real traffic to
//! exist as a crawlable page.
//!
//! Each gate is a pure function of the primary entity and its flights. A
//! missing primary entity always fails closed.

use crate::domain::entities::{AirportRecord, FlightRecord, IndexingCheck, RouteRecord};

/// Minimum combined activity before an airport page is indexed.
const MIN_AIRPORT_ACTIVITY: i64 = 5;
/// Minimum flights for an airline-at-airport page.
const MIN_AIRLINE_AIRPORT_FLIGHTS: usize = 3;

/// Frequency strings that mean "no service" despite being present.
const ZERO_FREQUENCIES: [&str; 2] = ["0 flights", "0-0 flights"];

/// Page whose activity should be gated, with the data each gate needs.
#[derive(Debug, Clone, Copy)]
pub enum IndexingSubject<'a> {
    Route {
        flights: &'a [FlightRecord],
        route: Option<&'a RouteRecord>,
    },
    Airport {
        airport: Option<&'a AirportRecord>,
        flights: &'a [FlightRecord],
    },
    AirlineRoute {
        flights: &'a [FlightRecord],
        route: Option<&'a RouteRecord>,
    },
    AirlineAirport {
        flights: &'a [FlightRecord],
        airport: Option<&'a AirportRecord>,
    },
}

impl IndexingSubject<'_> {
    pub fn page_type(&self) -> &'static str {
        match self {
            Self::Route { .. } => "route",
            Self::Airport { .. } => "airport",
            Self::AirlineRoute { .. } => "airline-route",
            Self::AirlineAirport { .. } => "airline-airport",
        }
    }
}

/// Runs the gate matching the subject's page type.
pub fn check_indexing_eligibility(subject: IndexingSubject<'_>) -> IndexingCheck {
    match subject {
        IndexingSubject::Route { flights, route } => should_index_route(flights, route),
        IndexingSubject::Airport { airport, flights } => should_index_airport(airport, flights),
        IndexingSubject::AirlineRoute { flights, route } => {
            should_index_airline_route(flights, route)
        }
        IndexingSubject::AirlineAirport { flights, airport } => {
            should_index_airline_airport(flights, airport)
        }
    }
}

/// Route page gate.
pub fn should_index_route(flights: &[FlightRecord], route: Option<&RouteRecord>) -> IndexingCheck {
    let Some(route) = route else {
        return IndexingCheck::deny("Route not found");
    };

    if flights.is_empty() {
        return IndexingCheck::deny("No active flights");
    }

    if !route.has_flight_data {
        return IndexingCheck::deny("Route has no flight data");
    }

    match route.flights_per_day.as_deref().map(str::trim) {
        None | Some("") => IndexingCheck::deny("No flight frequency data"),
        Some(freq) if ZERO_FREQUENCIES.contains(&freq) => {
            IndexingCheck::deny("Zero daily flights")
        }
        Some(_) => IndexingCheck::allow(),
    }
}

/// Airport page gate.
pub fn should_index_airport(
    airport: Option<&AirportRecord>,
    flights: &[FlightRecord],
) -> IndexingCheck {
    let Some(airport) = airport else {
        return IndexingCheck::deny("Airport not found");
    };

    let total_activity = airport.total_activity();
    if total_activity == 0 {
        return IndexingCheck::deny("No flight activity");
    }

    if airport.destinations_count.unwrap_or(0) == 0 {
        return IndexingCheck::deny("No destinations");
    }

    if total_activity < MIN_AIRPORT_ACTIVITY && flights.len() < MIN_AIRPORT_ACTIVITY as usize {
        return IndexingCheck::deny("Insufficient activity (less than 5 flights)");
    }

    IndexingCheck::allow()
}

/// Airline-on-route page gate.
pub fn should_index_airline_route(
    flights: &[FlightRecord],
    route: Option<&RouteRecord>,
) -> IndexingCheck {
    if route.is_none() {
        return IndexingCheck::deny("Route not found");
    }

    if flights.is_empty() {
        return IndexingCheck::deny("No flights for this airline on route");
    }

    IndexingCheck::allow()
}

/// Airline-at-airport page gate.
pub fn should_index_airline_airport(
    flights: &[FlightRecord],
    airport: Option<&AirportRecord>,
) -> IndexingCheck {
    if airport.is_none() {
        return IndexingCheck::deny("Airport not found");
    }

    if flights.is_empty() {
        return IndexingCheck::deny("No flights for this airline at airport");
    }

    if flights.len() < MIN_AIRLINE_AIRPORT_FLIGHTS {
        return IndexingCheck::deny("Insufficient flights (less than 3)");
    }

    IndexingCheck::allow()
}
