//! API route configuration.

use crate::api::handlers::{
    airport_quality_handler, audit_report_handler, duplicate_check_handler,
    evaluate_quality_handler, indexing_check_handler, not_found_handler, quick_health_handler,
    related_links_handler, route_quality_handler, sitemap_entry_handler, strategy_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /quality/evaluate`        - Score raw page metrics
/// - `POST /quality/route`           - Score a route page from its data
/// - `POST /quality/airport`         - Score an airport page from its data
/// - `POST /indexing/check`          - Run the activity gate of a page type
/// - `POST /sitemap/entry`           - Sitemap inclusion and priority
/// - `GET  /links/strategy/{role}`   - Linking strategy of a role
/// - `POST /links/related`           - Related links of a page
/// - `POST /content/duplicate`       - Content signature duplicate check
/// - `GET  /audit/report`            - Sampled index health report
/// - `GET  /audit/quick`             - Condensed health check
///
/// Any other path answers 404 with the JSON error body.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/quality/evaluate", post(evaluate_quality_handler))
        .route("/quality/route", post(route_quality_handler))
        .route("/quality/airport", post(airport_quality_handler))
        .route("/indexing/check", post(indexing_check_handler))
        .route("/sitemap/entry", post(sitemap_entry_handler))
        .route("/links/strategy/{role}", get(strategy_handler))
        .route("/links/related", post(related_links_handler))
        .route("/content/duplicate", post(duplicate_check_handler))
        .route("/audit/report", get(audit_report_handler))
        .route("/audit/quick", get(quick_health_handler))
        .fallback(not_found_handler)
}
