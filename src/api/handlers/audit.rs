//! Handlers for the index health audit.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::audit::AuditQuery;
use crate::domain::entities::{AuditReport, QuickHealth};
use crate::error::AppError;
use crate::state::AppState;

/// Runs a sampled audit over airports and routes.
///
/// # Endpoint
///
/// `GET /api/audit/report?sample_size=100`
///
/// # Errors
///
/// - 400 Bad Request if `sample_size` is outside `1..=1000`
/// - 504 Gateway Timeout if the audit exceeds its deadline
/// - 500 Internal Server Error if the samples cannot be fetched
pub async fn audit_report_handler(
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> Result<Json<AuditReport>, AppError> {
    params.validate()?;

    let sample_size = params.sample_size.unwrap_or(state.default_sample_size);
    let report = state.audit_service.run_audit(sample_size).await?;

    Ok(Json(report))
}

/// Condensed audit over a fixed sample.
///
/// # Endpoint
///
/// `GET /api/audit/quick`
pub async fn quick_health_handler(
    State(state): State<AppState>,
) -> Result<Json<QuickHealth>, AppError> {
    let health = state.audit_service.quick_health_check().await?;
    Ok(Json(health))
}
