//! Storage of content hashes for duplicate detection.
//!
//! Provides a [`ContentHashStore`] trait with two implementations:
//! - [`InMemoryHashStore`] - Process-local sets, used when Redis is not configured
//! - [`RedisHashStore`] - Redis sets shared across service instances

mod memory_store;
mod redis_store;
mod store;

pub use memory_store::InMemoryHashStore;
pub use redis_store::RedisHashStore;
pub use store::{ContentHashStore, HashStoreError, HashStoreResult};
