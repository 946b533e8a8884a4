//! SQLite implementation of the snapshot repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entities::{NewSnapshot, Snapshot, SnapshotStatus};
use crate::domain::repositories::{RETENTION_LIMIT, SnapshotRepository};
use crate::error::AppError;

/// SQLite repository for a link's snapshot sequence.
pub struct SqliteSnapshotRepository {
    pool: SqlitePool,
}

impl SqliteSnapshotRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SnapshotRow {
    id: i64,
    link_id: i64,
    content: String,
    checked_at: DateTime<Utc>,
    diff_html: String,
    summary: String,
    status: String,
}

impl SnapshotRow {
    fn into_snapshot(self) -> Snapshot {
        Snapshot {
            id: self.id,
            link_id: self.link_id,
            content: self.content,
            checked_at: self.checked_at,
            diff_html: self.diff_html,
            summary: self.summary,
            status: SnapshotStatus::from_db(&self.status),
        }
    }
}

#[async_trait]
impl SnapshotRepository for SqliteSnapshotRepository {
    async fn latest_content(&self, link_id: i64) -> Result<String, AppError> {
        let content: Option<String> = sqlx::query_scalar(
            "SELECT content FROM snapshots WHERE link_id = ? \
             ORDER BY checked_at DESC, id DESC LIMIT 1",
        )
        .bind(link_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(content.unwrap_or_default())
    }

    async fn record(&self, link_id: i64, new: NewSnapshot) -> Result<Snapshot, AppError> {
        let checked_at = Utc::now();

        // Insert and prune form one logical operation; committing them
        // together keeps the retention invariant from leaking rows when the
        // process dies between the two statements.
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO snapshots (link_id, content, checked_at, diff_html, summary, status) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(link_id)
        .bind(&new.content)
        .bind(checked_at)
        .bind(&new.diff_html)
        .bind(&new.summary)
        .bind(new.status.as_str())
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();

        sqlx::query(
            "DELETE FROM snapshots WHERE link_id = ? AND id NOT IN ( \
                 SELECT id FROM snapshots WHERE link_id = ? \
                 ORDER BY checked_at DESC, id DESC LIMIT ? \
             )",
        )
        .bind(link_id)
        .bind(link_id)
        .bind(RETENTION_LIMIT)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Snapshot {
            id,
            link_id,
            content: new.content,
            checked_at,
            diff_html: new.diff_html,
            summary: new.summary,
            status: new.status,
        })
    }

    async fn history(&self, link_id: i64, limit: i64) -> Result<Vec<Snapshot>, AppError> {
        let rows: Vec<SnapshotRow> = sqlx::query_as(
            "SELECT id, link_id, content, checked_at, diff_html, summary, status \
             FROM snapshots WHERE link_id = ? \
             ORDER BY checked_at DESC, id DESC LIMIT ?",
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SnapshotRow::into_snapshot).collect())
    }

    async fn delete_for_link(&self, link_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM snapshots WHERE link_id = ?")
            .bind(link_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
