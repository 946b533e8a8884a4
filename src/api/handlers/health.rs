//! Handler for the health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always responds 200; degraded components are reported in the body. The
/// `llm` field reflects credential presence only, since probing the external
/// service on every health poll would burn quota.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "Health check database probe failed");
            "error"
        }
    };

    let llm = if state.llm_configured {
        "connected"
    } else {
        "no API key set"
    };

    Json(HealthResponse {
        backend: "ok",
        database,
        llm,
        timestamp: Utc::now(),
    })
}
