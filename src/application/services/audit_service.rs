//! Sampled index health audit.
//!
//! The audit re-runs the quality evaluator and activity gates over a random
//! sample of airports and routes, then groups pages by their allowed-section
//! set to surface templates that render identically at scale.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::{
    AirportRecord, AuditReport, DuplicatePattern, FlightRecord, PageQualityInput, QuickHealth,
    RouteFilter, RouteRecord, is_publishable,
};
use crate::domain::indexing_gate::{should_index_airport, should_index_route};
use crate::domain::quality_evaluator::evaluate_page_quality;
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;

/// Sample size used by [`AuditService::quick_health_check`].
pub const QUICK_CHECK_SAMPLE_SIZE: usize = 50;

/// A pattern is reported only when shared by more than this many pages.
const DUPLICATE_PATTERN_THRESHOLD: usize = 5;

/// Sample URLs kept per duplicate pattern.
const MAX_PATTERN_URLS: usize = 10;

/// Evaluated page of one sampled entity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AuditedPage {
    pub url: String,
    pub pattern: String,
    pub indexable: bool,
}

enum AuditTarget {
    Airport(AirportRecord),
    Route(RouteRecord),
}

/// Runs the batch audit against the entity repository.
///
/// Per-entity flight fetches run concurrently, bounded by `concurrency`.
/// An entity whose fetch fails is skipped and counted in
/// [`AuditReport::skipped_pages`] instead of aborting the run.
pub struct AuditService<R: EntityRepository + ?Sized> {
    repository: Arc<R>,
    concurrency: usize,
    deadline: Duration,
}

impl<R: EntityRepository + ?Sized> AuditService<R> {
    pub fn new(repository: Arc<R>, concurrency: usize, deadline: Duration) -> Self {
        Self {
            repository,
            concurrency: concurrency.max(1),
            deadline,
        }
    }

    /// Samples up to `sample_size` airports and `sample_size` routes with
    /// flight data and aggregates their verdicts.
    ///
    /// # Errors
    ///
    /// Returns an error if either sample list cannot be fetched.
    pub async fn generate_index_health_report(
        &self,
        sample_size: usize,
    ) -> Result<AuditReport, AppError> {
        let airports = self.repository.fetch_airports_sample(sample_size).await?;
        let routes = self
            .repository
            .fetch_routes_sample(sample_size, RouteFilter::with_flight_data())
            .await?;

        info!(
            airports = airports.len(),
            routes = routes.len(),
            concurrency = self.concurrency,
            "Starting index health audit"
        );

        let targets = airports
            .into_iter()
            .map(AuditTarget::Airport)
            .chain(routes.into_iter().map(AuditTarget::Route));

        let repository = &self.repository;
        let pages: Vec<Option<AuditedPage>> = stream::iter(targets)
            .map(|target| async move {
                match target {
                    AuditTarget::Airport(airport) => {
                        match repository.fetch_airport_flights(&airport.iata).await {
                            Ok(flights) => Some(audit_airport(&airport, &flights)),
                            Err(e) => {
                                warn!(iata = %airport.iata, "Skipping airport in audit: {}", e);
                                None
                            }
                        }
                    }
                    AuditTarget::Route(route) => {
                        match repository
                            .fetch_route_flights(&route.origin_iata, &route.destination_iata)
                            .await
                        {
                            Ok(flights) => Some(audit_route(&route, &flights)),
                            Err(e) => {
                                warn!(
                                    origin = %route.origin_iata,
                                    destination = %route.destination_iata,
                                    "Skipping route in audit: {}", e
                                );
                                None
                            }
                        }
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let report = summarize(pages);

        info!(
            total = report.total_pages,
            indexable = report.indexable_pages,
            skipped = report.skipped_pages,
            rate = report.indexability_rate,
            patterns = report.duplicate_patterns.len(),
            "Index health audit finished"
        );

        Ok(report)
    }

    /// Like [`Self::generate_index_health_report`], bounded by the
    /// configured deadline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Timeout`] when the deadline elapses first.
    pub async fn run_audit(&self, sample_size: usize) -> Result<AuditReport, AppError> {
        match tokio::time::timeout(self.deadline, self.generate_index_health_report(sample_size))
            .await
        {
            Ok(result) => result,
            Err(_) => {
                warn!(sample_size, deadline = ?self.deadline, "Index health audit timed out");
                Err(AppError::timeout(
                    "Audit did not finish in time",
                    json!({ "timeout_seconds": self.deadline.as_secs() }),
                ))
            }
        }
    }

    /// Condensed audit over a fixed sample of 50.
    pub async fn quick_health_check(&self) -> Result<QuickHealth, AppError> {
        let report = self.run_audit(QUICK_CHECK_SAMPLE_SIZE).await?;
        Ok(QuickHealth::from(&report))
    }
}

fn clamp_count(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

fn pattern_key(page_type: &str, sections: &[String]) -> String {
    format!("{}:{}", page_type, sections.join(","))
}

/// Airport verdict built from the stored counters.
pub(crate) fn audit_airport(airport: &AirportRecord, flights: &[FlightRecord]) -> AuditedPage {
    let input = PageQualityInput {
        flights_count: clamp_count(airport.departure_count),
        routes_count: clamp_count(airport.destinations_count.unwrap_or(0)),
        terminals_count: u32::try_from(airport.terminals.len()).unwrap_or(u32::MAX),
        has_airport_data: true,
        ..Default::default()
    };

    let quality = evaluate_page_quality(&input);
    let indexing = should_index_airport(Some(airport), flights);

    AuditedPage {
        url: airport.page_url(),
        pattern: pattern_key("airport", &quality.sorted_sections()),
        indexable: is_publishable(&indexing, &quality),
    }
}

/// Route verdict built from the fetched flights.
pub(crate) fn audit_route(route: &RouteRecord, flights: &[FlightRecord]) -> AuditedPage {
    let airlines: HashSet<&str> = flights.iter().map(|f| f.airline_code.as_str()).collect();

    let input = PageQualityInput {
        flights_count: u32::try_from(flights.len()).unwrap_or(u32::MAX),
        airlines_count: u32::try_from(airlines.len()).unwrap_or(u32::MAX),
        distance_available: true,
        duration_available: route.has_duration(),
        has_route_data: true,
        ..Default::default()
    };

    let quality = evaluate_page_quality(&input);
    let indexing = should_index_route(flights, Some(route));

    AuditedPage {
        url: route.page_url(),
        pattern: pattern_key("route", &quality.sorted_sections()),
        indexable: is_publishable(&indexing, &quality),
    }
}

/// Aggregates page verdicts; `None` entries are skipped entities.
pub(crate) fn summarize(pages: impl IntoIterator<Item = Option<AuditedPage>>) -> AuditReport {
    let mut total_pages = 0;
    let mut indexable_pages = 0;
    let mut skipped_pages = 0;
    let mut groups: BTreeMap<String, (usize, Vec<String>)> = BTreeMap::new();

    for page in pages {
        let Some(page) = page else {
            skipped_pages += 1;
            continue;
        };

        total_pages += 1;
        if page.indexable {
            indexable_pages += 1;
        }

        let (count, urls) = groups.entry(page.pattern).or_default();
        *count += 1;
        if urls.len() < MAX_PATTERN_URLS {
            urls.push(page.url);
        }
    }

    let mut duplicate_patterns: Vec<DuplicatePattern> = groups
        .into_iter()
        .filter(|(_, (count, _))| *count > DUPLICATE_PATTERN_THRESHOLD)
        .map(|(pattern, (count, urls))| DuplicatePattern {
            pattern,
            count,
            urls,
        })
        .collect();
    duplicate_patterns.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pattern.cmp(&b.pattern)));

    let indexability_rate = if total_pages == 0 {
        0.0
    } else {
        let rate = indexable_pages as f64 / total_pages as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    };

    AuditReport {
        total_pages,
        indexable_pages,
        noindex_pages: total_pages - indexable_pages,
        indexability_rate,
        duplicate_patterns,
        skipped_pages,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RouteCandidate;
    use crate::domain::repositories::MockEntityRepository;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn busy_airport(iata: &str) -> AirportRecord {
        let mut airport = AirportRecord::new(iata, format!("{iata} International"));
        airport.departure_count = 40;
        airport.arrival_count = 38;
        airport.destinations_count = Some(12);
        airport.terminals = vec!["T1".to_string(), "T2".to_string()];
        airport
    }

    fn quiet_airport(iata: &str) -> AirportRecord {
        AirportRecord::new(iata, format!("{iata} Field"))
    }

    fn live_route(origin: &str, destination: &str) -> RouteRecord {
        let mut route = RouteRecord::new(origin, destination);
        route.has_flight_data = true;
        route.flights_per_day = Some("3 flights".to_string());
        route.distance_km = Some(1150.0);
        route.average_duration = Some("2h 10m".to_string());
        route
    }

    fn flights(origin: &str, destination: &str, airlines: &[&str]) -> Vec<FlightRecord> {
        airlines
            .iter()
            .enumerate()
            .map(|(i, code)| FlightRecord::new(format!("{code}{i}"), *code, origin, destination))
            .collect()
    }

    fn page(url: &str, pattern: &str, indexable: bool) -> Option<AuditedPage> {
        Some(AuditedPage {
            url: url.to_string(),
            pattern: pattern.to_string(),
            indexable,
        })
    }

    #[test]
    fn test_audit_airport_uses_stored_counters() {
        let airport = busy_airport("DEL");
        let page = audit_airport(&airport, &[]);

        assert_eq!(page.url, "/airports/del");
        assert_eq!(
            page.pattern,
            "airport:flight_schedule,routes_list,statistics,terminals_info"
        );
        assert!(page.indexable);
    }

    #[test]
    fn test_audit_airport_without_activity_is_noindex() {
        let page = audit_airport(&quiet_airport("XYZ"), &[]);

        assert!(!page.indexable);
        assert_eq!(page.pattern, "airport:");
    }

    #[test]
    fn test_audit_route_counts_distinct_airlines() {
        let route = live_route("DEL", "BOM");
        let flights = flights("DEL", "BOM", &["AI", "AI", "6E"]);
        let page = audit_route(&route, &flights);

        assert_eq!(page.url, "/flights/del-bom");
        assert_eq!(
            page.pattern,
            "route:airline_comparison,airlines_list,distance_info,duration_info,flight_schedule"
        );
        assert!(page.indexable);
    }

    #[test]
    fn test_audit_route_without_flights_is_noindex() {
        let page = audit_route(&live_route("DEL", "BOM"), &[]);
        assert!(!page.indexable);
    }

    #[test]
    fn test_summarize_empty_sample() {
        let report = summarize(Vec::new());

        assert_eq!(report.total_pages, 0);
        assert_eq!(report.indexability_rate, 0.0);
        assert!(report.duplicate_patterns.is_empty());
    }

    #[test]
    fn test_summarize_rate_is_rounded() {
        let report = summarize(vec![
            page("/a", "p", true),
            page("/b", "p", false),
            page("/c", "p", false),
        ]);

        assert_eq!(report.total_pages, 3);
        assert_eq!(report.indexable_pages, 1);
        assert_eq!(report.noindex_pages, 2);
        assert_eq!(report.indexability_rate, 33.33);
    }

    #[test]
    fn test_summarize_pattern_threshold_and_url_cap() {
        let mut pages: Vec<_> = (0..12)
            .map(|i| page(&format!("/big/{i}"), "route:big", true))
            .collect();
        pages.extend((0..6).map(|i| page(&format!("/mid/{i}"), "route:mid", true)));
        pages.extend((0..5).map(|i| page(&format!("/small/{i}"), "route:small", true)));

        let report = summarize(pages);

        assert_eq!(report.duplicate_patterns.len(), 2);
        assert_eq!(report.duplicate_patterns[0].pattern, "route:big");
        assert_eq!(report.duplicate_patterns[0].count, 12);
        assert_eq!(report.duplicate_patterns[0].urls.len(), 10);
        assert_eq!(report.duplicate_patterns[1].pattern, "route:mid");
        assert_eq!(report.duplicate_patterns[1].urls.len(), 6);
    }

    #[test]
    fn test_summarize_counts_skipped_separately() {
        let report = summarize(vec![page("/a", "p", true), None, None]);

        assert_eq!(report.total_pages, 1);
        assert_eq!(report.skipped_pages, 2);
        assert_eq!(report.indexability_rate, 100.0);
    }

    #[tokio::test]
    async fn test_generate_report_with_mock_repository() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_airports_sample()
            .withf(|n| *n == 10)
            .times(1)
            .returning(|_| Ok(vec![busy_airport("DEL"), quiet_airport("XYZ")]));
        mock_repo
            .expect_fetch_routes_sample()
            .withf(|n, filter| *n == 10 && filter.has_flight_data == Some(true))
            .times(1)
            .returning(|_, _| Ok(vec![live_route("DEL", "BOM"), live_route("BOM", "GOI")]));
        mock_repo
            .expect_fetch_airport_flights()
            .times(2)
            .returning(|iata| {
                if iata == "XYZ" {
                    Err(AppError::internal("Database error", json!({})))
                } else {
                    Ok(flights(iata, "BOM", &["AI"]))
                }
            });
        mock_repo
            .expect_fetch_route_flights()
            .times(2)
            .returning(|origin, destination| Ok(flights(origin, destination, &["AI", "6E"])));

        let service = AuditService::new(Arc::new(mock_repo), 4, Duration::from_secs(5));
        let report = service.generate_index_health_report(10).await.unwrap();

        assert_eq!(report.total_pages, 3);
        assert_eq!(report.skipped_pages, 1);
        assert_eq!(report.indexable_pages, 3);
        assert_eq!(report.indexability_rate, 100.0);
    }

    #[tokio::test]
    async fn test_sample_fetch_failure_propagates() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_airports_sample()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        mock_repo.expect_fetch_routes_sample().never();

        let service = AuditService::new(Arc::new(mock_repo), 4, Duration::from_secs(5));
        let result = service.generate_index_health_report(10).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_quick_health_check_uses_fixed_sample() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_airports_sample()
            .withf(|n| *n == QUICK_CHECK_SAMPLE_SIZE)
            .times(1)
            .returning(|_| Ok(Vec::new()));
        mock_repo
            .expect_fetch_routes_sample()
            .withf(|n, _| *n == QUICK_CHECK_SAMPLE_SIZE)
            .times(1)
            .returning(|_, _| Ok((0..7).map(|i| live_route("DEL", &format!("D{i:02}"))).collect()));
        mock_repo
            .expect_fetch_route_flights()
            .returning(|origin, destination| Ok(flights(origin, destination, &["AI"])));

        let service = AuditService::new(Arc::new(mock_repo), 2, Duration::from_secs(5));
        let health = service.quick_health_check().await.unwrap();

        assert_eq!(health.indexability_rate, 100.0);
        assert_eq!(health.duplicate_pattern_count, 1);
    }

    /// Repository with artificial latency that records how many route
    /// flight fetches overlap.
    #[derive(Default)]
    struct DelayedRepository {
        sample_delay: Duration,
        flight_delay: Duration,
        routes: usize,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl EntityRepository for DelayedRepository {
        async fn fetch_candidate_routes_from_airport(
            &self,
            _: &str,
            _: usize,
        ) -> Result<Vec<RouteCandidate>, AppError> {
            Ok(Vec::new())
        }

        async fn fetch_airports_by_iata(&self, _: &[String]) -> Result<Vec<AirportRecord>, AppError> {
            Ok(Vec::new())
        }

        async fn fetch_airline_catalog(
            &self,
        ) -> Result<HashMap<String, crate::domain::entities::AirlineRecord>, AppError> {
            Ok(HashMap::new())
        }

        async fn fetch_airports_sample(&self, _: usize) -> Result<Vec<AirportRecord>, AppError> {
            tokio::time::sleep(self.sample_delay).await;
            Ok(Vec::new())
        }

        async fn fetch_routes_sample(
            &self,
            _: usize,
            _: RouteFilter,
        ) -> Result<Vec<RouteRecord>, AppError> {
            Ok((0..self.routes)
                .map(|i| live_route("DEL", &format!("D{i:02}")))
                .collect())
        }

        async fn fetch_airport_flights(&self, _: &str) -> Result<Vec<FlightRecord>, AppError> {
            Ok(Vec::new())
        }

        async fn fetch_route_flights(
            &self,
            origin: &str,
            destination: &str,
        ) -> Result<Vec<FlightRecord>, AppError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);

            tokio::time::sleep(self.flight_delay).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(flights(origin, destination, &["AI"]))
        }

        async fn health_check(&self) -> Result<(), AppError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_audit_times_out() {
        let repository = DelayedRepository {
            sample_delay: Duration::from_secs(5),
            ..Default::default()
        };
        let service = AuditService::new(Arc::new(repository), 1, Duration::from_millis(20));

        let result = service.run_audit(10).await;
        assert!(matches!(result, Err(AppError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_flight_fetches_respect_concurrency_limit() {
        let repository = Arc::new(DelayedRepository {
            flight_delay: Duration::from_millis(10),
            routes: 12,
            ..Default::default()
        });
        let service = AuditService::new(repository.clone(), 3, Duration::from_secs(5));

        let report = service.generate_index_health_report(12).await.unwrap();

        assert_eq!(report.total_pages, 12);
        assert_eq!(repository.peak.load(Ordering::SeqCst), 3);
        assert_eq!(repository.in_flight.load(Ordering::SeqCst), 0);
    }
}
