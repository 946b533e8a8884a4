//! Repository trait for snapshot storage and retention.

use async_trait::async_trait;

use crate::domain::entities::{NewSnapshot, Snapshot};
use crate::error::AppError;

/// Maximum number of snapshots retained per link. Inserting beyond this
/// immediately prunes the oldest rows.
pub const RETENTION_LIMIT: i64 = 5;

/// Repository interface for a link's snapshot sequence.
///
/// The store is the sole writer of snapshots. Snapshots are never mutated
/// after creation; they are deleted only by retention pruning or by cascading
/// link deletion.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSnapshotRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Returns the most recent snapshot's content for the link, or the empty
    /// string if the link has never been checked. The empty baseline makes
    /// the first check an ordinary all-additions diff rather than a special
    /// state.
    async fn latest_content(&self, link_id: i64) -> Result<String, AppError>;

    /// Persists a new snapshot with the current timestamp, then prunes any
    /// snapshots beyond the [`RETENTION_LIMIT`] most recent. Insert and prune
    /// run inside one transaction.
    async fn record(&self, link_id: i64, new: NewSnapshot) -> Result<Snapshot, AppError>;

    /// Returns up to `limit` most recent snapshots for the link, newest-first.
    async fn history(&self, link_id: i64, limit: i64) -> Result<Vec<Snapshot>, AppError>;

    /// Deletes every snapshot owned by the link. Used during link deletion.
    /// Returns the number of rows removed.
    async fn delete_for_link(&self, link_id: i64) -> Result<u64, AppError>;
}
