//! The change-detection pipeline: fetch, diff, summarize, persist.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::diff;
use crate::domain::entities::{NewSnapshot, Snapshot, SnapshotStatus};
use crate::domain::fetcher::PageFetcher;
use crate::domain::repositories::{LinkRepository, RETENTION_LIMIT, SnapshotRepository};
use crate::domain::summarizer::Summarizer;
use crate::error::AppError;

/// Result of running one check on a link.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    /// The page was fetched; a regular snapshot was recorded.
    Completed {
        changed: bool,
        diff_html: String,
        summary: String,
        checked_at: DateTime<Utc>,
    },
    /// The fetch failed; an error snapshot was recorded and the pipeline
    /// stopped short of diffing.
    Failed { summary: String },
}

/// Runs the fetch → diff → summarize → persist pipeline for a single link.
///
/// One check is one sequential chain; the only suspension points are the two
/// outbound network calls. Overlapping checks on the same link are not
/// serialized: two concurrent checks can each read the same baseline and both
/// record against it. Callers are expected to trigger at most one in-flight
/// check per link.
pub struct CheckService<L: LinkRepository, S: SnapshotRepository> {
    links: Arc<L>,
    snapshots: Arc<S>,
    fetcher: Arc<dyn PageFetcher>,
    summarizer: Arc<dyn Summarizer>,
}

impl<L: LinkRepository, S: SnapshotRepository> CheckService<L, S> {
    /// Creates a new check service.
    pub fn new(
        links: Arc<L>,
        snapshots: Arc<S>,
        fetcher: Arc<dyn PageFetcher>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            links,
            snapshots,
            fetcher,
            summarizer,
        }
    }

    /// Checks the link once and records the resulting snapshot.
    ///
    /// A fetch failure does not fail the call: it is persisted as an
    /// error-status snapshot carrying the failure message, and reported as
    /// [`CheckOutcome::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown link id and
    /// [`AppError::Internal`] on storage errors.
    pub async fn run_check(&self, link_id: i64) -> Result<CheckOutcome, AppError> {
        let link = self
            .links
            .find_by_id(link_id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": link_id })))?;

        let previous = self.snapshots.latest_content(link_id).await?;

        let content = match self.fetcher.fetch(&link.url).await {
            Ok(content) => content,
            Err(e) => {
                let summary = format!("Fetch failed: {e}");
                tracing::warn!(link_id, url = %link.url, "Check failed: {e}");

                // The error snapshot carries the previous content forward so
                // the next successful check still diffs against the last
                // real fetch.
                self.snapshots
                    .record(
                        link_id,
                        NewSnapshot {
                            content: previous,
                            diff_html: String::new(),
                            summary: summary.clone(),
                            status: SnapshotStatus::Error,
                        },
                    )
                    .await?;

                return Ok(CheckOutcome::Failed { summary });
            }
        };

        let diff_html = diff::render_markup(&previous, &content);
        let diff_plain = diff::render_plain(&previous, &content);

        let summary = self.summarizer.summarize(&link.url, &diff_plain).await;

        let snapshot = self
            .snapshots
            .record(
                link_id,
                NewSnapshot {
                    content,
                    diff_html: diff_html.clone(),
                    summary: summary.clone(),
                    status: SnapshotStatus::Ok,
                },
            )
            .await?;

        tracing::info!(
            link_id,
            changed = !diff_html.is_empty(),
            "Check completed"
        );

        Ok(CheckOutcome::Completed {
            changed: !diff_html.is_empty(),
            diff_html,
            summary,
            checked_at: snapshot.checked_at,
        })
    }

    /// Returns the retained snapshots for a link, newest-first.
    ///
    /// An unknown link id yields an empty history rather than an error.
    pub async fn history(&self, link_id: i64) -> Result<Vec<Snapshot>, AppError> {
        self.snapshots.history(link_id, RETENTION_LIMIT).await
    }
}
