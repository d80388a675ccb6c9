//! Fallback for unmatched API paths.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers unknown `/api` paths with the JSON error body instead of an
/// empty 404.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "Endpoint not found",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
