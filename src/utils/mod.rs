//! Utility functions shared across layers.
//!
//! - [`content_hash`] - Digit-invariant content signatures for duplicate detection

pub mod content_hash;
