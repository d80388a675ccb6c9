//! Application layer services.
//!
//! Pure page rules live in [`crate::domain`]; the services here add the
//! I/O around them: repository fetches, the shared hash store and the
//! concurrent audit run.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Related-link candidate fetching and allocation
//! - [`services::duplicate_service::DuplicateService`] - Content hash duplicate detection
//! - [`services::audit_service::AuditService`] - Sampled index health audit

pub mod services;
