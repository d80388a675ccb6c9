//! Duplicate content detection service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::infrastructure::hash_store::ContentHashStore;
use crate::utils::content_hash::generate_content_hash;

/// Detects repeated generated content per page type.
///
/// The first submission of a hash is never a duplicate; every later
/// submission of the same hash under the same page type is.
pub struct DuplicateService {
    store: Arc<dyn ContentHashStore>,
}

impl DuplicateService {
    pub fn new(store: Arc<dyn ContentHashStore>) -> Self {
        Self { store }
    }

    /// Records `hash` and reports whether it had been seen before.
    ///
    /// A store failure reports "not a duplicate".
    pub async fn check_content_duplicate(&self, page_type: &str, hash: &str) -> bool {
        match self.store.insert(page_type, hash).await {
            Ok(newly_added) => {
                if !newly_added {
                    debug!(page_type, hash, "Duplicate content hash");
                }
                !newly_added
            }
            Err(e) => {
                warn!(page_type, "Duplicate check failed: {}", e);
                false
            }
        }
    }

    /// Hashes `content` and checks it like [`Self::check_content_duplicate`].
    ///
    /// Returns the hash along with the verdict.
    pub async fn check_duplicate(&self, page_type: &str, content: &str) -> (String, bool) {
        let hash = generate_content_hash(content);
        let is_duplicate = self.check_content_duplicate(page_type, &hash).await;
        (hash, is_duplicate)
    }

    /// Whether `hash` is already recorded, without recording it.
    pub async fn is_known(&self, page_type: &str, hash: &str) -> bool {
        self.store.contains(page_type, hash).await.unwrap_or_else(|e| {
            warn!(page_type, "Hash lookup failed: {}", e);
            false
        })
    }

    /// Forgets the hashes of one page type.
    pub async fn reset(&self, page_type: &str) -> Result<(), AppError> {
        self.store.clear(page_type).await.map_err(|e| {
            AppError::internal(
                "Failed to clear content hashes",
                json!({ "page_type": page_type, "reason": e.to_string() }),
            )
        })
    }

    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}
