//! Quality and indexing decision types.
//!
//! These are transient values built per evaluation; none of them is persisted.

use serde::{Deserialize, Serialize};

/// Live metrics describing the data available to render a page.
///
/// `has_route_data` and `has_airport_data` only gate evaluation; they are
/// never counted towards the quality score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageQualityInput {
    pub flights_count: u32,
    pub airlines_count: u32,
    pub poi_count: u32,
    /// Caller-supplied score that replaces the evaluator's own count.
    pub unique_data_blocks: Option<u32>,
    pub schedules_count: u32,
    pub weather_data_available: bool,
    pub routes_count: u32,
    pub terminals_count: u32,
    pub distance_available: bool,
    pub duration_available: bool,
    pub has_route_data: bool,
    pub has_airport_data: bool,
}

/// Result of scoring a page's data categories.
///
/// `allowed_sections` is filled even when `indexable` is false. Render
/// decisions must check `indexable`, not the emptiness of the section list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageQualityCheck {
    pub indexable: bool,
    pub quality_score: u32,
    pub unique_data_points: Vec<String>,
    pub missing_data_points: Vec<String>,
    pub allowed_sections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PageQualityCheck {
    /// Allowed sections sorted, used for structural pattern keys.
    pub fn sorted_sections(&self) -> Vec<String> {
        let mut sections = self.allowed_sections.clone();
        sections.sort();
        sections
    }
}

/// Activity gate decision for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingCheck {
    pub should_index: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl IndexingCheck {
    pub fn allow() -> Self {
        Self {
            should_index: true,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            should_index: false,
            reason: Some(reason.into()),
        }
    }
}

/// Two-stage AND: a page is publishable only when the activity gate and the
/// quality evaluator both pass.
pub fn is_publishable(indexing: &IndexingCheck, quality: &PageQualityCheck) -> bool {
    indexing.should_index && quality.indexable
}
