//! DTO for the snapshot history endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Snapshot, SnapshotStatus};

/// One history entry as returned by `GET /links/{id}/history`.
///
/// The snapshot's raw content is deliberately not exposed; the frontend only
/// consumes the rendered diff and summary.
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub id: i64,
    pub checked_at: DateTime<Utc>,
    pub diff_html: String,
    pub summary: String,
    pub status: SnapshotStatus,
}

impl From<Snapshot> for SnapshotResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            id: snapshot.id,
            checked_at: snapshot.checked_at,
            diff_html: snapshot.diff_html,
            summary: snapshot.summary,
            status: snapshot.status,
        }
    }
}
