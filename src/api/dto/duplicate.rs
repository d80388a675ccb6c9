//! DTOs for content duplicate detection.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Lowercase hex hash as produced by the content hasher.
static CONTENT_HASH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{16}$").unwrap());

/// Either raw intro text to hash, or a precomputed hash.
///
/// `content` wins when both are given.
#[derive(Debug, Deserialize, Validate)]
pub struct DuplicateCheckRequest {
    #[validate(length(min = 1, max = 32))]
    pub page_type: String,

    #[validate(length(max = 100000))]
    pub content: Option<String>,

    #[validate(regex(path = "*CONTENT_HASH_REGEX", message = "Hash must be 16 lowercase hex characters"))]
    pub hash: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DuplicateCheckResponse {
    pub page_type: String,
    pub hash: String,
    pub is_duplicate: bool,
}
