//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain and application
//! layers, providing concrete storage backends.
//!
//! # Modules
//!
//! - [`hash_store`] - Content hash stores (in-memory and Redis)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod hash_store;
pub mod persistence;
