//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod audit;
pub mod duplicate;
pub mod fallback;
pub mod health;
pub mod indexing;
pub mod links;
pub mod quality;
pub mod sitemap;

pub use audit::{audit_report_handler, quick_health_handler};
pub use duplicate::duplicate_check_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use indexing::indexing_check_handler;
pub use links::{related_links_handler, strategy_handler};
pub use quality::{airport_quality_handler, evaluate_quality_handler, route_quality_handler};
pub use sitemap::sitemap_entry_handler;
