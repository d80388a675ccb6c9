//! Content hash store trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during hash store operations.
#[derive(Debug)]
pub enum HashStoreError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for HashStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Hash store connection error: {}", e),
            Self::OperationError(e) => write!(f, "Hash store operation error: {}", e),
        }
    }
}

impl std::error::Error for HashStoreError {}

/// Result type for hash store operations.
pub type HashStoreResult<T> = Result<T, HashStoreError>;

/// Set of seen content hashes, partitioned by page type.
///
/// The same hash under two page types is two distinct entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::hash_store::InMemoryHashStore`] - process-local, lost on restart
/// - [`crate::infrastructure::hash_store::RedisHashStore`] - shared across instances
#[async_trait]
pub trait ContentHashStore: Send + Sync {
    /// Returns whether `hash` has been recorded for `page_type`.
    async fn contains(&self, page_type: &str, hash: &str) -> HashStoreResult<bool>;

    /// Records `hash` for `page_type`.
    ///
    /// Check and insert happen atomically: returns `true` if the hash was
    /// newly added, `false` if it was already present.
    async fn insert(&self, page_type: &str, hash: &str) -> HashStoreResult<bool>;

    /// Forgets every hash of `page_type`.
    async fn clear(&self, page_type: &str) -> HashStoreResult<()>;

    /// Checks if the store backend is healthy.
    async fn health_check(&self) -> bool;
}
