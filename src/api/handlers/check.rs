//! Handler for the check endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::check::CheckResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Runs the change-detection pipeline once for a link.
///
/// # Endpoint
///
/// `POST /links/{id}/check`
///
/// # Behavior
///
/// Fetches the page, diffs against the previous snapshot, asks the
/// summarizer to narrate the diff, and records the new snapshot. A failed
/// fetch is still a 200 response: it is recorded as an error-status
/// snapshot and reported as `{"status": "error", "summary": ...}`.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn check_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CheckResponse>, AppError> {
    let outcome = state.check_service.run_check(id).await?;

    Ok(Json(CheckResponse::from(outcome)))
}
