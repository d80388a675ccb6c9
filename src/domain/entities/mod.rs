//! Core domain entities representing the page-quality data model.
//!
//! Entities are plain data structures; the rules that act on them live in
//! the sibling modules of [`crate::domain`].
//!
//! # Entity Types
//!
//! - [`AirportRecord`], [`RouteRecord`], [`FlightRecord`], [`AirlineRecord`] -
//!   records supplied by the data-access layer
//! - [`PageQualityInput`] / [`PageQualityCheck`] - quality scoring
//! - [`IndexingCheck`] - activity gate decision
//! - [`EntityRole`], [`RoleInfo`], [`LinkingStrategy`] - role classification
//! - [`Candidate`], [`RelatedCandidates`], [`RelatedLinks`] - link allocation
//! - [`AuditReport`] - batch index health summary

pub mod airport;
pub mod audit;
pub mod flight;
pub mod link;
pub mod quality;
pub mod role;
pub mod route;

pub use airport::AirportRecord;
pub use audit::{AuditReport, DuplicatePattern, QuickHealth};
pub use flight::{AirlineRecord, FlightRecord, PointOfInterest};
pub use link::{
    BlogPost, Candidate, Capability, FormattedLink, LinkCategory, RelatedCandidates, RelatedLinks,
};
pub use quality::{IndexingCheck, PageQualityCheck, PageQualityInput, is_publishable};
pub use role::{EntityRole, LinkingStrategy, RoleInfo, UnknownRole};
pub use route::{RouteCandidate, RouteFilter, RouteRecord, route_page_url};
