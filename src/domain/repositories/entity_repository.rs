//! Repository trait for the flight data consumed by the quality engine.

use std::collections::HashMap;

use crate::domain::entities::{
    AirlineRecord, AirportRecord, FlightRecord, RouteCandidate, RouteFilter, RouteRecord,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to airports, routes, flights and airlines.
///
/// Failures on the primary entity of a page are surfaced as errors or
/// `None` so the gates fail closed. Callers fetching secondary link
/// candidates degrade errors to an empty category.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEntityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Routes departing from an airport, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_candidate_routes_from_airport(
        &self,
        iata: &str,
        limit: usize,
    ) -> Result<Vec<RouteCandidate>, AppError>;

    /// Airports matching the given IATA codes. Unknown codes are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_airports_by_iata(&self, iatas: &[String]) -> Result<Vec<AirportRecord>, AppError>;

    /// Full airline catalog keyed by airline code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_airline_catalog(&self) -> Result<HashMap<String, AirlineRecord>, AppError>;

    /// Random sample of up to `n` airports.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_airports_sample(&self, n: usize) -> Result<Vec<AirportRecord>, AppError>;

    /// Random sample of up to `n` routes matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_routes_sample(
        &self,
        n: usize,
        filter: RouteFilter,
    ) -> Result<Vec<RouteRecord>, AppError>;

    /// Flights departing from an airport.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_airport_flights(&self, iata: &str) -> Result<Vec<FlightRecord>, AppError>;

    /// Flights operating a route.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_route_flights(
        &self,
        origin_iata: &str,
        destination_iata: &str,
    ) -> Result<Vec<FlightRecord>, AppError>;

    /// Verifies the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be queried.
    async fn health_check(&self) -> Result<(), AppError>;
}
