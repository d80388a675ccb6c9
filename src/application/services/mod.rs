//! Business logic services for the application layer.

pub mod audit_service;
pub mod duplicate_service;
pub mod link_service;

pub use audit_service::AuditService;
pub use duplicate_service::DuplicateService;
pub use link_service::{LinkService, RelatedLinksQuery};
