#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use page_quality_engine::api::handlers::health_handler;
use page_quality_engine::api::routes::api_routes;
use page_quality_engine::domain::entities::{
    AirlineRecord, AirportRecord, FlightRecord, RouteCandidate, RouteFilter, RouteRecord,
};
use page_quality_engine::domain::repositories::EntityRepository;
use page_quality_engine::error::AppError;
use page_quality_engine::infrastructure::hash_store::InMemoryHashStore;
use page_quality_engine::state::{AppState, AuditSettings};

/// In-memory stand-in for the PostgreSQL repository.
///
/// Samples are returned in insertion order instead of randomly.
#[derive(Default)]
pub struct FakeEntityRepository {
    pub airports: Vec<AirportRecord>,
    pub routes: Vec<RouteRecord>,
    pub flights: Vec<FlightRecord>,
    pub airlines: Vec<AirlineRecord>,
    pub unhealthy: bool,
}

#[async_trait]
impl EntityRepository for FakeEntityRepository {
    async fn fetch_candidate_routes_from_airport(
        &self,
        iata: &str,
        limit: usize,
    ) -> Result<Vec<RouteCandidate>, AppError> {
        Ok(self
            .routes
            .iter()
            .filter(|r| r.origin_iata == iata)
            .take(limit)
            .map(|r| RouteCandidate {
                origin_iata: r.origin_iata.clone(),
                destination_iata: r.destination_iata.clone(),
                has_flight_data: r.has_flight_data,
                destination_city: r.destination_city.clone(),
                flights_per_day: r.flights_per_day.clone(),
            })
            .collect())
    }

    async fn fetch_airports_by_iata(&self, iatas: &[String]) -> Result<Vec<AirportRecord>, AppError> {
        Ok(iatas
            .iter()
            .filter_map(|iata| self.airports.iter().find(|a| &a.iata == iata).cloned())
            .collect())
    }

    async fn fetch_airline_catalog(&self) -> Result<HashMap<String, AirlineRecord>, AppError> {
        Ok(self
            .airlines
            .iter()
            .map(|a| (a.code.clone(), a.clone()))
            .collect())
    }

    async fn fetch_airports_sample(&self, n: usize) -> Result<Vec<AirportRecord>, AppError> {
        Ok(self.airports.iter().take(n).cloned().collect())
    }

    async fn fetch_routes_sample(
        &self,
        n: usize,
        filter: RouteFilter,
    ) -> Result<Vec<RouteRecord>, AppError> {
        Ok(self
            .routes
            .iter()
            .filter(|r| filter.has_flight_data.is_none_or(|want| r.has_flight_data == want))
            .take(n)
            .cloned()
            .collect())
    }

    async fn fetch_airport_flights(&self, iata: &str) -> Result<Vec<FlightRecord>, AppError> {
        Ok(self
            .flights
            .iter()
            .filter(|f| f.origin_iata == iata)
            .cloned()
            .collect())
    }

    async fn fetch_route_flights(
        &self,
        origin_iata: &str,
        destination_iata: &str,
    ) -> Result<Vec<FlightRecord>, AppError> {
        Ok(self
            .flights
            .iter()
            .filter(|f| f.origin_iata == origin_iata && f.destination_iata == destination_iata)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        if self.unhealthy {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

pub fn airport(iata: &str, city: &str, departures: i64, destinations: i64) -> AirportRecord {
    let mut airport = AirportRecord::new(iata, format!("{city} International"));
    airport.city = Some(city.to_string());
    airport.departure_count = departures;
    airport.arrival_count = departures;
    airport.destinations_count = Some(destinations);
    airport.terminals = vec!["T1".to_string(), "T2".to_string()];
    airport
}

pub fn route(origin: &str, destination: &str, frequency: Option<&str>) -> RouteRecord {
    let mut route = RouteRecord::new(origin, destination);
    route.has_flight_data = frequency.is_some();
    route.flights_per_day = frequency.map(str::to_string);
    route.distance_km = Some(1150.0);
    route.average_duration = Some("2h 10m".to_string());
    route
}

pub fn flight(number: &str, airline: &str, origin: &str, destination: &str) -> FlightRecord {
    FlightRecord::new(number, airline, origin, destination).with_departure_time("06:15")
}

/// Two busy airports, one idle airport, three live routes and one dead route.
pub fn sample_repository() -> FakeEntityRepository {
    FakeEntityRepository {
        airports: vec![
            airport("DEL", "Delhi", 40, 12),
            airport("BOM", "Mumbai", 35, 10),
            airport("IXZ", "Port Blair", 0, 0),
        ],
        routes: vec![
            route("DEL", "BOM", Some("12 flights")),
            route("DEL", "GOI", Some("4 flights")),
            route("DEL", "BLR", Some("9 flights")),
            route("DEL", "IXZ", None),
        ],
        flights: vec![
            flight("AI101", "AI", "DEL", "BOM"),
            flight("6E201", "6E", "DEL", "BOM"),
            flight("UK301", "UK", "DEL", "BOM"),
            flight("6E202", "6E", "DEL", "GOI"),
            flight("AI501", "AI", "DEL", "BLR"),
            flight("AI102", "AI", "BOM", "DEL"),
        ],
        airlines: vec![
            AirlineRecord::new("AI", "Air India"),
            AirlineRecord::new("6E", "IndiGo"),
            AirlineRecord::new("UK", "Vistara"),
        ],
        unhealthy: false,
    }
}

pub fn create_test_state(repository: FakeEntityRepository) -> AppState {
    AppState::new(
        Arc::new(repository),
        Arc::new(InMemoryHashStore::new()),
        AuditSettings::default(),
    )
}

/// Health route plus every `/api` route, without the outer middleware.
pub fn test_app(repository: FakeEntityRepository) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(create_test_state(repository))
}
