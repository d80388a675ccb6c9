//! Page quality scoring.
//!
//! A page's quality score is the number of distinct, non-empty data
//! categories backing it. A page is indexable when the score reaches
//! [`MIN_UNIQUE_DATA_BLOCKS`] and it has at least one primary data source
//! (flights, route data or airport data).
//!
//! The route and airport adapters compute `unique_data_blocks` themselves
//! and pass it as an override. Their hand count does not cover every
//! category the evaluator scores (route schedules, airport airlines), so
//! the two counts can differ for the same data.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::entities::{
    AirlineRecord, AirportRecord, FlightRecord, PageQualityCheck, PageQualityInput,
    PointOfInterest, RouteRecord,
};

/// Minimum score for an indexable page.
pub const MIN_UNIQUE_DATA_BLOCKS: u32 = 3;

const STATISTICS_MIN_FLIGHTS: u32 = 10;
const COMPARISON_MIN_AIRLINES: u32 = 1;

/// Accumulates present and missing categories in evaluation order.
#[derive(Default)]
struct Tally {
    unique: Vec<String>,
    missing: Vec<String>,
    sections: Vec<String>,
}

impl Tally {
    fn count(&mut self, name: &str, section: &str, count: u32) {
        if count > 0 {
            self.unique.push(format!("{name}:{count}"));
            self.sections.push(section.to_string());
        } else {
            self.missing.push(name.to_string());
        }
    }

    fn flag(&mut self, name: &str, section: &str, present: bool) {
        if present {
            self.unique.push(name.to_string());
            self.sections.push(section.to_string());
        } else {
            self.missing.push(name.to_string());
        }
    }
}

/// Scores a page and decides indexability and renderable sections.
pub fn evaluate_page_quality(input: &PageQualityInput) -> PageQualityCheck {
    if input.flights_count == 0 && !input.has_route_data && !input.has_airport_data {
        return PageQualityCheck {
            indexable: false,
            quality_score: 0,
            unique_data_points: Vec::new(),
            missing_data_points: vec![
                "flights".to_string(),
                "route_data".to_string(),
                "airport_data".to_string(),
            ],
            allowed_sections: Vec::new(),
            reason: Some("No flight, route or airport data".to_string()),
        };
    }

    let mut tally = Tally::default();
    tally.count("flights", "flight_schedule", input.flights_count);
    tally.count("airlines", "airlines_list", input.airlines_count);
    tally.count("pois", "points_of_interest", input.poi_count);
    tally.count("schedules", "schedule_table", input.schedules_count);
    tally.flag("weather", "weather_info", input.weather_data_available);
    tally.count("routes", "routes_list", input.routes_count);
    tally.count("terminals", "terminals_info", input.terminals_count);
    tally.flag("distance", "distance_info", input.distance_available);
    tally.flag("duration", "duration_info", input.duration_available);

    let quality_score = input
        .unique_data_blocks
        .unwrap_or(tally.unique.len() as u32);

    let Tally {
        unique,
        missing,
        mut sections,
    } = tally;

    if quality_score < MIN_UNIQUE_DATA_BLOCKS {
        return PageQualityCheck {
            indexable: false,
            quality_score,
            unique_data_points: unique,
            missing_data_points: missing,
            allowed_sections: sections,
            reason: Some(format!(
                "Insufficient unique data blocks: {quality_score}/{MIN_UNIQUE_DATA_BLOCKS} required"
            )),
        };
    }

    if input.flights_count > STATISTICS_MIN_FLIGHTS {
        sections.push("statistics".to_string());
    }
    if input.airlines_count > COMPARISON_MIN_AIRLINES {
        sections.push("airline_comparison".to_string());
    }
    if input.schedules_count > 0 {
        sections.push("calendar_view".to_string());
    }

    PageQualityCheck {
        indexable: true,
        quality_score,
        unique_data_points: unique,
        missing_data_points: missing,
        allowed_sections: sections,
        reason: None,
    }
}

/// Source data for a route page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoutePageData {
    pub flights: Vec<FlightRecord>,
    pub route: Option<RouteRecord>,
    pub pois: Vec<PointOfInterest>,
    pub airlines: Vec<AirlineRecord>,
}

/// Source data for an airport page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AirportPageData {
    pub airport: Option<AirportRecord>,
    pub flights: Vec<FlightRecord>,
    pub routes_from: Vec<RouteRecord>,
    pub pois: Vec<PointOfInterest>,
    pub terminals: Vec<String>,
    pub weather_available: bool,
}

fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Builds the evaluator input for a route page and scores it.
pub fn evaluate_route_page_quality(data: &RoutePageData) -> PageQualityCheck {
    let route = data.route.as_ref();
    let distance_available = route.and_then(|r| r.distance_km).is_some_and(|d| d > 0.0);
    let duration_available = route.is_some_and(RouteRecord::has_duration);

    let unique_data_blocks = [
        !data.flights.is_empty(),
        !data.airlines.is_empty(),
        !data.pois.is_empty(),
        distance_available,
        duration_available,
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    let input = PageQualityInput {
        flights_count: len_u32(data.flights.len()),
        airlines_count: len_u32(data.airlines.len()),
        poi_count: len_u32(data.pois.len()),
        unique_data_blocks: Some(len_u32(unique_data_blocks)),
        schedules_count: len_u32(data.flights.iter().filter(|f| f.has_schedule()).count()),
        distance_available,
        duration_available,
        has_route_data: route.is_some(),
        ..Default::default()
    };

    evaluate_page_quality(&input)
}

/// Builds the evaluator input for an airport page and scores it.
pub fn evaluate_airport_page_quality(data: &AirportPageData) -> PageQualityCheck {
    let airlines: HashSet<&str> = data
        .flights
        .iter()
        .map(|f| f.airline_code.as_str())
        .collect();

    let unique_data_blocks = [
        !data.flights.is_empty(),
        !data.routes_from.is_empty(),
        !data.pois.is_empty(),
        !data.terminals.is_empty(),
        data.weather_available,
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    let input = PageQualityInput {
        flights_count: len_u32(data.flights.len()),
        airlines_count: len_u32(airlines.len()),
        poi_count: len_u32(data.pois.len()),
        unique_data_blocks: Some(len_u32(unique_data_blocks)),
        weather_data_available: data.weather_available,
        routes_count: len_u32(data.routes_from.len()),
        terminals_count: len_u32(data.terminals.len()),
        has_airport_data: data.airport.is_some(),
        ..Default::default()
    };

    evaluate_page_quality(&input)
}
