//! Handlers for link management endpoints (list, create, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, LinkOverviewResponse, LinkResponse, UpdateLinkRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all monitored links with their latest check result.
///
/// # Endpoint
///
/// `GET /links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkOverviewResponse>>, AppError> {
    let overviews = state.link_service.list_links().await?;

    Ok(Json(
        overviews.into_iter().map(LinkOverviewResponse::from).collect(),
    ))
}

/// Registers a URL for monitoring.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/releases",
///   "label": "Example releases",   // optional, defaults to the url
///   "tags": ["upstream"],          // optional
///   "project": "infra"             // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a non-HTTP(S) URL and 409 Conflict when the
/// URL is already registered.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .register_link(payload.url, payload.label, payload.tags, payload.project)
        .await?;

    Ok((StatusCode::CREATED, Json(LinkResponse::from(link))))
}

/// Partially updates a link's metadata.
///
/// # Endpoint
///
/// `PATCH /links/{id}`
///
/// Only provided fields are changed; the URL itself is immutable.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .update_link(id, payload.into_patch())
        .await?;

    Ok(Json(LinkResponse::from(link)))
}

/// Deletes a link and all of its snapshots.
///
/// # Endpoint
///
/// `DELETE /links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
