//! API route configuration.

use crate::api::handlers::{
    check_link_handler, create_link_handler, delete_link_handler, health_handler,
    history_handler, list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /health`              - Component status probe
/// - `GET    /links`               - List links with latest check result
/// - `POST   /links`               - Register a URL for monitoring
/// - `PATCH  /links/{id}`          - Partially update a link
/// - `DELETE /links/{id}`          - Delete a link and its snapshots
/// - `POST   /links/{id}/check`    - Run the change-detection pipeline once
/// - `GET    /links/{id}/history`  - Retained snapshots, newest-first
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            patch(update_link_handler).delete(delete_link_handler),
        )
        .route("/links/{id}/check", post(check_link_handler))
        .route("/links/{id}/history", get(history_handler))
}
