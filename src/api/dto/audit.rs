//! Query parameters for audit endpoints.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// Audit report query.
///
/// Falls back to the configured sample size when `sample_size` is absent.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AuditQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 1000))]
    pub sample_size: Option<usize>,
}
