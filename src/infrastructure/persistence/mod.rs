//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgEntityRepository`] - Airports, routes, flights and airline catalog

pub mod pg_entity_repository;

pub use pg_entity_repository::PgEntityRepository;
