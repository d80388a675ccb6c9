//! Related-link selection service.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{
    AirlineRecord, AirportRecord, BlogPost, Candidate, RelatedCandidates, RelatedLinks,
    RouteCandidate,
};
use crate::domain::link_budget::{LinkBudget, build_related_links, select_indexable};
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;

/// Entities a page can draw related links from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedLinksQuery {
    pub page_type: String,
    /// Airport whose departing routes are linked.
    pub airport_iata: Option<String>,
    /// Airports referenced by the page.
    pub airport_iatas: Vec<String>,
    /// Airlines referenced by the page.
    pub airline_codes: Vec<String>,
}

/// Service for fetching, filtering and formatting related links.
///
/// Every category is fetched with a 2x over-read so that dropping
/// non-indexable candidates still leaves enough to fill the limit. A failed
/// fetch empties that category only.
pub struct LinkService<R: EntityRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: EntityRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Indexable routes departing from `iata`, at most `limit`.
    ///
    /// A route candidate is indexable when it carries flight data.
    pub async fn get_related_routes(&self, iata: &str, limit: usize) -> Vec<Candidate<RouteCandidate>> {
        if limit == 0 {
            return Vec::new();
        }

        let routes = match self
            .repository
            .fetch_candidate_routes_from_airport(iata, limit * 2)
            .await
        {
            Ok(routes) => routes,
            Err(e) => {
                warn!(iata, "Related routes unavailable: {}", e);
                return Vec::new();
            }
        };

        let candidates = routes
            .into_iter()
            .map(|route| {
                let should_index = route.has_flight_data;
                Candidate::new(route, should_index)
            })
            .collect();

        select_indexable(candidates, limit)
    }

    /// Referenced airports, at most `limit`.
    ///
    /// A referenced airport is assumed indexable.
    pub async fn get_related_airports(
        &self,
        iatas: &[String],
        limit: usize,
    ) -> Vec<Candidate<AirportRecord>> {
        if limit == 0 || iatas.is_empty() {
            return Vec::new();
        }

        let requested: Vec<String> = iatas.iter().take(limit * 2).cloned().collect();
        let airports = match self.repository.fetch_airports_by_iata(&requested).await {
            Ok(airports) => airports,
            Err(e) => {
                warn!("Related airports unavailable: {}", e);
                return Vec::new();
            }
        };

        let candidates = airports
            .into_iter()
            .map(|airport| Candidate::new(airport, true))
            .collect();

        select_indexable(candidates, limit)
    }

    /// Referenced airlines found in the catalog, at most `limit`.
    pub async fn get_related_airlines(
        &self,
        codes: &[String],
        limit: usize,
    ) -> Vec<Candidate<AirlineRecord>> {
        if limit == 0 || codes.is_empty() {
            return Vec::new();
        }

        let catalog = match self.repository.fetch_airline_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Related airlines unavailable: {}", e);
                return Vec::new();
            }
        };

        let candidates = codes
            .iter()
            .take(limit * 2)
            .map(|code| match catalog.get(code) {
                Some(airline) => Candidate::new(airline.clone(), true),
                None => Candidate::new(AirlineRecord::new(code.clone(), code.clone()), false),
            })
            .collect();

        select_indexable(candidates, limit)
    }

    /// Blog candidates.
    ///
    /// # Errors
    ///
    /// Always returns [`AppError::NotImplemented`]: there is no blog source yet.
    pub async fn get_related_blogs(&self, limit: usize) -> Result<Vec<Candidate<BlogPost>>, AppError> {
        Err(AppError::not_implemented(
            "Blog linking is not implemented",
            json!({ "category": "blogs", "limit": limit }),
        ))
    }

    /// Fetches every category the page's budget allows and builds its
    /// related links.
    pub async fn related_links(&self, query: &RelatedLinksQuery) -> RelatedLinks {
        let budget = LinkBudget::for_page_type(&query.page_type);
        let mut candidates = RelatedCandidates::default();

        if budget.routes > 0 {
            if let Some(iata) = query.airport_iata.as_deref() {
                candidates.routes = self.get_related_routes(iata, budget.routes).await;
            }
        }
        if budget.airports > 0 {
            candidates.airports = self
                .get_related_airports(&query.airport_iatas, budget.airports)
                .await;
        }
        if budget.airlines > 0 {
            candidates.airlines = self
                .get_related_airlines(&query.airline_codes, budget.airlines)
                .await;
        }
        if budget.blogs > 0 {
            match self.get_related_blogs(budget.blogs).await {
                Ok(blogs) => candidates.blogs = blogs,
                Err(e) => debug!(page_type = %query.page_type, "{}", e),
            }
        }

        build_related_links(&query.page_type, &candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkCategory;
    use crate::domain::repositories::MockEntityRepository;
    use std::collections::HashMap;

    fn route_candidates(n: usize) -> Vec<RouteCandidate> {
        (0..n)
            .map(|i| RouteCandidate::new("DEL", format!("D{i:02}"), i % 2 == 0))
            .collect()
    }

    fn catalog() -> HashMap<String, AirlineRecord> {
        ["AI", "6E", "UK"]
            .into_iter()
            .map(|code| (code.to_string(), AirlineRecord::new(code, format!("{code} Airways"))))
            .collect()
    }

    #[tokio::test]
    async fn test_get_related_routes_over_fetches_and_filters() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_candidate_routes_from_airport()
            .withf(|iata, limit| iata == "DEL" && *limit == 12)
            .times(1)
            .returning(|_, _| Ok(route_candidates(12)));

        let service = LinkService::new(Arc::new(mock_repo));
        let routes = service.get_related_routes("DEL", 6).await;

        assert_eq!(routes.len(), 6);
        assert!(routes.iter().all(|r| r.should_index));
        assert!(routes.iter().all(|r| r.entity.has_flight_data));
    }

    #[tokio::test]
    async fn test_get_related_routes_never_exceeds_limit() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_candidate_routes_from_airport()
            .returning(|_, limit| {
                Ok((0..limit)
                    .map(|i| RouteCandidate::new("BOM", format!("D{i:02}"), true))
                    .collect())
            });

        let service = LinkService::new(Arc::new(mock_repo));

        for limit in [1, 3, 6] {
            let routes = service.get_related_routes("BOM", limit).await;
            assert_eq!(routes.len(), limit);
        }
    }

    #[tokio::test]
    async fn test_get_related_routes_degrades_on_error() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_candidate_routes_from_airport()
            .times(1)
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));
        assert!(service.get_related_routes("DEL", 6).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_related_airlines_requires_catalog_entry() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_airline_catalog()
            .times(1)
            .returning(|| Ok(catalog()));

        let service = LinkService::new(Arc::new(mock_repo));
        let codes = vec!["AI".to_string(), "ZZ".to_string(), "UK".to_string()];
        let airlines = service.get_related_airlines(&codes, 4).await;

        assert_eq!(airlines.len(), 2);
        assert_eq!(airlines[0].entity.name, "AI Airways");
        assert_eq!(airlines[1].entity.code, "UK");
    }

    #[tokio::test]
    async fn test_get_related_airports_assumes_indexable() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_airports_by_iata()
            .times(1)
            .returning(|iatas| {
                Ok(iatas
                    .iter()
                    .map(|iata| AirportRecord::new(iata.clone(), format!("{iata} Airport")))
                    .collect())
            });

        let service = LinkService::new(Arc::new(mock_repo));
        let iatas: Vec<String> = ["DEL", "BOM", "GOI"].iter().map(|s| s.to_string()).collect();
        let airports = service.get_related_airports(&iatas, 2).await;

        assert_eq!(airports.len(), 2);
        assert!(airports.iter().all(|a| a.should_index));
    }

    #[tokio::test]
    async fn test_get_related_blogs_is_not_implemented() {
        let service = LinkService::new(Arc::new(MockEntityRepository::new()));

        let result = service.get_related_blogs(3).await;
        assert!(matches!(result, Err(AppError::NotImplemented { .. })));
    }

    #[tokio::test]
    async fn test_related_links_for_route_page() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo.expect_fetch_candidate_routes_from_airport().never();
        mock_repo
            .expect_fetch_airports_by_iata()
            .times(1)
            .returning(|iatas| {
                Ok(iatas
                    .iter()
                    .map(|iata| AirportRecord::new(iata.clone(), format!("{iata} Airport")))
                    .collect())
            });
        mock_repo
            .expect_fetch_airline_catalog()
            .times(1)
            .returning(|| Ok(catalog()));

        let service = LinkService::new(Arc::new(mock_repo));
        let query = RelatedLinksQuery {
            page_type: "route".to_string(),
            airport_iata: Some("DEL".to_string()),
            airport_iatas: vec!["DEL".to_string(), "BOM".to_string()],
            airline_codes: vec!["AI".to_string(), "6E".to_string()],
        };

        let links = service.related_links(&query).await;

        assert!(links.routes.is_empty());
        assert_eq!(links.airports.len(), 2);
        assert_eq!(links.airlines.len(), 2);
        assert_eq!(links.unavailable, vec![LinkCategory::Blogs]);
        assert!(links.total() <= 8);
        assert_eq!(links.airports[0].anchor, "DEL Airport (DEL)");
        assert_eq!(links.airports[1].anchor, "BOM airport");
    }

    #[tokio::test]
    async fn test_related_links_airline_failure_keeps_other_categories() {
        let mut mock_repo = MockEntityRepository::new();

        mock_repo
            .expect_fetch_candidate_routes_from_airport()
            .returning(|_, _| Ok(route_candidates(12)));
        mock_repo
            .expect_fetch_airline_catalog()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo));
        let query = RelatedLinksQuery {
            page_type: "airport".to_string(),
            airport_iata: Some("DEL".to_string()),
            airline_codes: vec!["AI".to_string()],
            ..Default::default()
        };

        let links = service.related_links(&query).await;

        assert_eq!(links.routes.len(), 6);
        assert!(links.airlines.is_empty());
        assert!(links.airports.is_empty());
    }
}
