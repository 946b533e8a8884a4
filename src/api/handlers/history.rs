//! Handler for the snapshot history endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::snapshot::SnapshotResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the retained snapshots for a link, newest-first.
///
/// # Endpoint
///
/// `GET /links/{id}/history`
///
/// At most the retention window (5 snapshots) is ever returned. An unknown
/// link id yields an empty list.
pub async fn history_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SnapshotResponse>>, AppError> {
    let snapshots = state.check_service.history(id).await?;

    Ok(Json(
        snapshots.into_iter().map(SnapshotResponse::from).collect(),
    ))
}
