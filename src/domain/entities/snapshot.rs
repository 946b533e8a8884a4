//! Snapshot entity: one point-in-time fetch result for a link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of the check that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStatus {
    Ok,
    Error,
}

impl SnapshotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotStatus::Ok => "ok",
            SnapshotStatus::Error => "error",
        }
    }

    /// Decodes a stored status column. Unknown values read as `Ok`; the
    /// column predates the enum and only ever held these two strings.
    pub fn from_db(s: &str) -> Self {
        match s {
            "error" => SnapshotStatus::Error,
            _ => SnapshotStatus::Ok,
        }
    }
}

/// One fetch result for a link, immutable after creation.
///
/// `diff_html` is empty when nothing changed or when the check failed;
/// `content` carries the normalized page text the next check diffs against.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub id: i64,
    pub link_id: i64,
    pub content: String,
    pub checked_at: DateTime<Utc>,
    pub diff_html: String,
    pub summary: String,
    pub status: SnapshotStatus,
}

/// Input data for recording a new snapshot; `checked_at` is assigned by the
/// store at insertion time.
#[derive(Debug, Clone)]
pub struct NewSnapshot {
    pub content: String,
    pub diff_html: String,
    pub summary: String,
    pub status: SnapshotStatus,
}
