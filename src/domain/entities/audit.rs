//! Index health audit results.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Group of structurally identical pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicatePattern {
    /// `page_type:sorted,allowed,sections`
    pub pattern: String,
    pub count: usize,
    /// Up to ten sample page URLs.
    pub urls: Vec<String>,
}

/// Aggregate of one sampled audit run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub total_pages: usize,
    pub indexable_pages: usize,
    pub noindex_pages: usize,
    /// Percentage rounded to two decimals.
    pub indexability_rate: f64,
    pub duplicate_patterns: Vec<DuplicatePattern>,
    /// Sampled entities whose per-entity fetch failed.
    pub skipped_pages: usize,
    pub generated_at: DateTime<Utc>,
}

/// Condensed report returned by the quick health check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickHealth {
    pub indexability_rate: f64,
    pub duplicate_pattern_count: usize,
}

impl From<&AuditReport> for QuickHealth {
    fn from(report: &AuditReport) -> Self {
        Self {
            indexability_rate: report.indexability_rate,
            duplicate_pattern_count: report.duplicate_patterns.len(),
        }
    }
}
