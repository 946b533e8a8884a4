//! Repository trait for monitored-link data access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Link, LinkPatch, NewLink, SnapshotStatus};
use crate::error::AppError;

/// A link joined with the headline fields of its most recent snapshot.
///
/// The snapshot fields are `None` for links that have never been checked.
#[derive(Debug, Clone)]
pub struct LinkOverview {
    pub link: Link,
    pub last_summary: Option<String>,
    pub last_status: Option<SnapshotStatus>,
    pub last_checked: Option<DateTime<Utc>>,
}

/// Repository interface for managing monitored links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Registers a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the URL is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest-first, each annotated with its latest
    /// snapshot's summary, status and check time.
    async fn list_with_latest(&self) -> Result<Vec<LinkOverview>, AppError>;

    /// Partially updates a link.
    ///
    /// Only fields present in [`LinkPatch`] are modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches `id`.
    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError>;

    /// Deletes a link row. Returns `false` if no row matched.
    ///
    /// Snapshot cleanup is the caller's job, via
    /// [`super::SnapshotRepository::delete_for_link`].
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
