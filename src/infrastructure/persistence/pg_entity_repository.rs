//! PostgreSQL implementation of the entity repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    AirlineRecord, AirportRecord, FlightRecord, RouteCandidate, RouteFilter, RouteRecord,
};
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;

/// PostgreSQL repository for airports, routes, flights and airlines.
///
/// Queries are checked at runtime and mapped through [`FromRow`] row types.
pub struct PgEntityRepository {
    pool: Arc<PgPool>,
}

impl PgEntityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn as_limit(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[derive(FromRow)]
struct AirportRow {
    iata: String,
    name: String,
    city: Option<String>,
    country: Option<String>,
    departure_count: i64,
    arrival_count: i64,
    destinations_count: Option<i64>,
    terminals: Vec<String>,
}

impl From<AirportRow> for AirportRecord {
    fn from(r: AirportRow) -> Self {
        Self {
            iata: r.iata,
            name: r.name,
            city: r.city,
            country: r.country,
            departure_count: r.departure_count,
            arrival_count: r.arrival_count,
            destinations_count: r.destinations_count,
            terminals: r.terminals,
        }
    }
}

#[derive(FromRow)]
struct RouteRow {
    origin_iata: String,
    destination_iata: String,
    origin_city: Option<String>,
    destination_city: Option<String>,
    distance_km: Option<f64>,
    average_duration: Option<String>,
    flights_per_day: Option<String>,
    has_flight_data: bool,
}

impl From<RouteRow> for RouteRecord {
    fn from(r: RouteRow) -> Self {
        Self {
            origin_iata: r.origin_iata,
            destination_iata: r.destination_iata,
            origin_city: r.origin_city,
            destination_city: r.destination_city,
            distance_km: r.distance_km,
            average_duration: r.average_duration,
            flights_per_day: r.flights_per_day,
            has_flight_data: r.has_flight_data,
        }
    }
}

#[derive(FromRow)]
struct FlightRow {
    flight_number: String,
    airline_code: String,
    origin_iata: String,
    destination_iata: String,
    departure_time: Option<String>,
    arrival_time: Option<String>,
}

impl From<FlightRow> for FlightRecord {
    fn from(r: FlightRow) -> Self {
        Self {
            flight_number: r.flight_number,
            airline_code: r.airline_code,
            origin_iata: r.origin_iata,
            destination_iata: r.destination_iata,
            departure_time: r.departure_time,
            arrival_time: r.arrival_time,
        }
    }
}

#[derive(FromRow)]
struct AirlineRow {
    code: String,
    name: String,
    country: Option<String>,
}

const AIRPORT_COLUMNS: &str = "iata, name, city, country, departure_count, arrival_count, \
                               destinations_count, terminals";

const FLIGHT_COLUMNS: &str =
    "flight_number, airline_code, origin_iata, destination_iata, departure_time, arrival_time";

#[async_trait]
impl EntityRepository for PgEntityRepository {
    async fn fetch_candidate_routes_from_airport(
        &self,
        iata: &str,
        limit: usize,
    ) -> Result<Vec<RouteCandidate>, AppError> {
        let rows = sqlx::query_as::<_, RouteRow>(
            r#"
            SELECT origin_iata, destination_iata, origin_city, destination_city,
                   distance_km, average_duration, flights_per_day, has_flight_data
            FROM routes
            WHERE origin_iata = $1
            ORDER BY has_flight_data DESC, destination_iata
            LIMIT $2
            "#,
        )
        .bind(iata)
        .bind(as_limit(limit))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| RouteCandidate {
                origin_iata: r.origin_iata,
                destination_iata: r.destination_iata,
                has_flight_data: r.has_flight_data,
                destination_city: r.destination_city,
                flights_per_day: r.flights_per_day,
            })
            .collect())
    }

    async fn fetch_airports_by_iata(&self, iatas: &[String]) -> Result<Vec<AirportRecord>, AppError> {
        if iatas.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {AIRPORT_COLUMNS} FROM airports WHERE iata = ANY($1) ORDER BY array_position($1, iata)"
        );
        let rows = sqlx::query_as::<_, AirportRow>(&sql)
            .bind(iatas)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(AirportRecord::from).collect())
    }

    async fn fetch_airline_catalog(&self) -> Result<HashMap<String, AirlineRecord>, AppError> {
        let rows = sqlx::query_as::<_, AirlineRow>("SELECT code, name, country FROM airlines")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                (
                    r.code.clone(),
                    AirlineRecord {
                        code: r.code,
                        name: r.name,
                        country: r.country,
                    },
                )
            })
            .collect())
    }

    async fn fetch_airports_sample(&self, n: usize) -> Result<Vec<AirportRecord>, AppError> {
        let sql = format!("SELECT {AIRPORT_COLUMNS} FROM airports ORDER BY random() LIMIT $1");
        let rows = sqlx::query_as::<_, AirportRow>(&sql)
            .bind(as_limit(n))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(AirportRecord::from).collect())
    }

    async fn fetch_routes_sample(
        &self,
        n: usize,
        filter: RouteFilter,
    ) -> Result<Vec<RouteRecord>, AppError> {
        let rows = sqlx::query_as::<_, RouteRow>(
            r#"
            SELECT origin_iata, destination_iata, origin_city, destination_city,
                   distance_km, average_duration, flights_per_day, has_flight_data
            FROM routes
            WHERE ($1::boolean IS NULL OR has_flight_data = $1)
            ORDER BY random()
            LIMIT $2
            "#,
        )
        .bind(filter.has_flight_data)
        .bind(as_limit(n))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(RouteRecord::from).collect())
    }

    async fn fetch_airport_flights(&self, iata: &str) -> Result<Vec<FlightRecord>, AppError> {
        let sql = format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE origin_iata = $1");
        let rows = sqlx::query_as::<_, FlightRow>(&sql)
            .bind(iata)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(FlightRecord::from).collect())
    }

    async fn fetch_route_flights(
        &self,
        origin_iata: &str,
        destination_iata: &str,
    ) -> Result<Vec<FlightRecord>, AppError> {
        let sql = format!(
            "SELECT {FLIGHT_COLUMNS} FROM flights WHERE origin_iata = $1 AND destination_iata = $2"
        );
        let rows = sqlx::query_as::<_, FlightRow>(&sql)
            .bind(origin_iata)
            .bind(destination_iata)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(FlightRecord::from).collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
