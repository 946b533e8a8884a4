//! DTO for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health probe response.
///
/// `database` is `ok`/`error` from a liveness query; `llm` reports whether a
/// summarization credential is configured, not whether the service is
/// reachable.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub backend: &'static str,
    pub database: &'static str,
    pub llm: &'static str,
    pub timestamp: DateTime<Utc>,
}
