//! Content signatures for near-duplicate detection.
//!
//! Generated pages of the same type often differ only in numbers (flight
//! numbers, counts, prices). The signature ignores digits and whitespace
//! layout so such blocks hash identically.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Number of hex characters kept from the SHA-256 digest.
pub const CONTENT_HASH_LEN: usize = 16;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes text before hashing: digits removed, whitespace runs
/// collapsed to one space, trimmed, lowercased.
pub fn normalize_content(text: &str) -> String {
    let without_digits = DIGITS.replace_all(text, "");
    let collapsed = WHITESPACE.replace_all(&without_digits, " ");
    collapsed.trim().to_lowercase()
}

/// Returns the 16-hex-character content signature of `text`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     generate_content_hash("Flight 123 from DEL to BOM"),
///     generate_content_hash("Flight 456 from DEL to BOM"),
/// );
/// ```
pub fn generate_content_hash(text: &str) -> String {
    let digest = Sha256::digest(normalize_content(text).as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(CONTENT_HASH_LEN);
    hash
}
