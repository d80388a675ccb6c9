//! Repository trait definitions for the domain layer.
//!
//! This module defines the data-access contract the engine depends on.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`EntityRepository`] - Airports, routes, flights and airline catalog

pub mod entity_repository;

pub use entity_repository::EntityRepository;

#[cfg(test)]
pub use entity_repository::MockEntityRepository;
