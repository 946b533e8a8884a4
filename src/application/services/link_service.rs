//! Link registration and management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::{LinkOverview, LinkRepository, SnapshotRepository};
use crate::error::AppError;

/// Service for registering and managing monitored links.
///
/// Owns URL scheme validation and the snapshot cascade on deletion.
pub struct LinkService<L: LinkRepository, S: SnapshotRepository> {
    links: Arc<L>,
    snapshots: Arc<S>,
}

impl<L: LinkRepository, S: SnapshotRepository> LinkService<L, S> {
    /// Creates a new link service.
    pub fn new(links: Arc<L>, snapshots: Arc<S>) -> Self {
        Self { links, snapshots }
    }

    /// Lists all links, each annotated with its latest check result.
    pub async fn list_links(&self) -> Result<Vec<LinkOverview>, AppError> {
        self.links.list_with_latest().await
    }

    /// Registers a URL for monitoring.
    ///
    /// The label falls back to the URL itself when absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not start with
    /// `http://` or `https://`, and [`AppError::Conflict`] if it is already
    /// registered.
    pub async fn register_link(
        &self,
        url: String,
        label: Option<String>,
        tags: Vec<String>,
        project: String,
    ) -> Result<Link, AppError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::bad_request(
                "URL must start with http:// or https://",
                json!({ "url": url }),
            ));
        }

        let label = label
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| url.clone());

        self.links
            .create(NewLink {
                url,
                label,
                tags,
                project,
            })
            .await
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.links
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Applies a partial update to a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn update_link(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        if patch.is_empty() {
            return self.get_link(id).await;
        }
        self.links.update(id, patch).await
    }

    /// Deletes a link together with all of its snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        if self.links.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        let removed = self.snapshots.delete_for_link(id).await?;
        self.links.delete(id).await?;
        tracing::info!(link_id = id, snapshots_removed = removed, "Link deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::{MockLinkRepository, MockSnapshotRepository};
    use chrono::Utc;

    fn make_link(id: i64, url: &str, label: &str) -> Link {
        Link::new(
            id,
            url.to_string(),
            label.to_string(),
            vec![],
            String::new(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_register_link_success() {
        let mut links = MockLinkRepository::new();
        let snapshots = MockSnapshotRepository::new();

        links
            .expect_create()
            .withf(|new_link| new_link.url == "https://example.com")
            .times(1)
            .returning(|new_link| Ok(make_link(1, &new_link.url, &new_link.label)));

        let service = LinkService::new(Arc::new(links), Arc::new(snapshots));
        let link = service
            .register_link(
                "https://example.com".to_string(),
                Some("Example".to_string()),
                vec![],
                String::new(),
            )
            .await
            .unwrap();

        assert_eq!(link.label, "Example");
    }

    #[tokio::test]
    async fn test_register_link_label_defaults_to_url() {
        let mut links = MockLinkRepository::new();
        let snapshots = MockSnapshotRepository::new();

        links
            .expect_create()
            .withf(|new_link| new_link.label == "http://example.com")
            .times(1)
            .returning(|new_link| Ok(make_link(1, &new_link.url, &new_link.label)));

        let service = LinkService::new(Arc::new(links), Arc::new(snapshots));
        let link = service
            .register_link("http://example.com".to_string(), None, vec![], String::new())
            .await
            .unwrap();

        assert_eq!(link.label, "http://example.com");
    }

    #[tokio::test]
    async fn test_register_link_rejects_bad_scheme() {
        let mut links = MockLinkRepository::new();
        let snapshots = MockSnapshotRepository::new();
        links.expect_create().times(0);

        let service = LinkService::new(Arc::new(links), Arc::new(snapshots));
        let result = service
            .register_link("ftp://example.com".to_string(), None, vec![], String::new())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_link_cascades_snapshots() {
        let mut links = MockLinkRepository::new();
        let mut snapshots = MockSnapshotRepository::new();

        links
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(make_link(id, "https://example.com", "e"))));
        snapshots
            .expect_delete_for_link()
            .times(1)
            .returning(|_| Ok(3));
        links.expect_delete().times(1).returning(|_| Ok(true));

        let service = LinkService::new(Arc::new(links), Arc::new(snapshots));
        assert!(service.delete_link(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_link_missing_is_not_found() {
        let mut links = MockLinkRepository::new();
        let mut snapshots = MockSnapshotRepository::new();

        links.expect_find_by_id().times(1).returning(|_| Ok(None));
        snapshots.expect_delete_for_link().times(0);
        links.expect_delete().times(0);

        let service = LinkService::new(Arc::new(links), Arc::new(snapshots));
        let result = service.delete_link(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_with_empty_patch_is_a_read() {
        let mut links = MockLinkRepository::new();
        let snapshots = MockSnapshotRepository::new();

        links
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(make_link(id, "https://example.com", "e"))));
        links.expect_update().times(0);

        let service = LinkService::new(Arc::new(links), Arc::new(snapshots));
        let link = service.update_link(1, LinkPatch::default()).await.unwrap();
        assert_eq!(link.id, 1);
    }
}
