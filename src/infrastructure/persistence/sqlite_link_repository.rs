//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;

use crate::domain::entities::{Link, LinkPatch, NewLink, SnapshotStatus};
use crate::domain::repositories::{LinkOverview, LinkRepository};
use crate::error::{AppError, map_sqlx_error};

/// SQLite repository for link storage and retrieval.
pub struct SqliteLinkRepository {
    pool: SqlitePool,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    url: String,
    label: String,
    tags: String,
    project: String,
    created_at: DateTime<Utc>,
}

impl LinkRow {
    fn into_link(self) -> Link {
        Link::new(
            self.id,
            self.url,
            self.label,
            decode_tags(&self.tags),
            self.project,
            self.created_at,
        )
    }
}

#[derive(sqlx::FromRow)]
struct OverviewRow {
    id: i64,
    url: String,
    label: String,
    tags: String,
    project: String,
    created_at: DateTime<Utc>,
    last_summary: Option<String>,
    last_status: Option<String>,
    last_checked: Option<DateTime<Utc>>,
}

impl OverviewRow {
    fn into_overview(self) -> LinkOverview {
        LinkOverview {
            link: Link::new(
                self.id,
                self.url,
                self.label,
                decode_tags(&self.tags),
                self.project,
                self.created_at,
            ),
            last_summary: self.last_summary,
            last_status: self.last_status.as_deref().map(SnapshotStatus::from_db),
            last_checked: self.last_checked,
        }
    }
}

fn decode_tags(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn encode_tags(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO links (url, label, tags, project, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new_link.url)
        .bind(&new_link.label)
        .bind(encode_tags(&new_link.tags))
        .bind(&new_link.project)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::conflict("URL already registered", json!({ "url": new_link.url.clone() }))
            } else {
                map_sqlx_error(e)
            }
        })?;

        Ok(Link::new(
            result.last_insert_rowid(),
            new_link.url,
            new_link.label,
            new_link.tags,
            new_link.project,
            created_at,
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            "SELECT id, url, label, tags, project, created_at FROM links WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LinkRow::into_link))
    }

    async fn list_with_latest(&self) -> Result<Vec<LinkOverview>, AppError> {
        let rows: Vec<OverviewRow> = sqlx::query_as(
            r#"
            SELECT l.id, l.url, l.label, l.tags, l.project, l.created_at,
                   s.summary AS last_summary,
                   s.status AS last_status,
                   s.checked_at AS last_checked
            FROM links l
            LEFT JOIN (
                SELECT link_id, summary, status, checked_at,
                       ROW_NUMBER() OVER (
                           PARTITION BY link_id
                           ORDER BY checked_at DESC, id DESC
                       ) AS rn
                FROM snapshots
            ) s ON s.link_id = l.id AND s.rn = 1
            ORDER BY l.created_at DESC, l.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OverviewRow::into_overview).collect())
    }

    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        let tags = patch.tags.as_deref().map(encode_tags);

        let result = sqlx::query(
            r#"
            UPDATE links SET
                label = COALESCE(?, label),
                tags = COALESCE(?, tags),
                project = COALESCE(?, project)
            WHERE id = ?
            "#,
        )
        .bind(&patch.label)
        .bind(&tags)
        .bind(&patch.project)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Link not found", json!({ "id": id })));
        }

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::internal("Link missing after update", json!({ "id": id }))
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
