#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use webmonitor::application::services::{CheckService, LinkService};
use webmonitor::domain::fetcher::{FetchError, PageFetcher};
use webmonitor::infrastructure::llm::GroqSummarizer;
use webmonitor::infrastructure::persistence::{SqliteLinkRepository, SqliteSnapshotRepository};
use webmonitor::state::AppState;

/// Page fetcher fed from a queue of canned results.
///
/// Each `fetch` consumes the next queued entry; an empty queue fails the
/// fetch, which surfaces as an error snapshot and makes a missing stub easy
/// to spot in assertions.
pub struct StubFetcher {
    responses: Mutex<VecDeque<Result<String, FetchError>>>,
}

impl StubFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
        })
    }

    pub fn push_content(&self, content: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(content.to_string()));
    }

    pub fn push_error(&self, error: FetchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no stubbed response".to_string())))
    }
}

/// Builds application state over the given pool with a stub fetcher and a
/// credential-less summarizer, so check responses carry its deterministic
/// placeholder messages.
pub fn create_test_state(pool: SqlitePool, fetcher: Arc<StubFetcher>) -> AppState {
    let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let snapshot_repository = Arc::new(SqliteSnapshotRepository::new(pool.clone()));

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        snapshot_repository.clone(),
    ));
    let check_service = Arc::new(CheckService::new(
        link_repository,
        snapshot_repository,
        fetcher,
        Arc::new(GroqSummarizer::new(None)),
    ));

    AppState {
        db: pool,
        link_service,
        check_service,
        llm_configured: false,
    }
}

/// Test server with the full route set mounted.
pub fn make_server(state: AppState) -> TestServer {
    let app = webmonitor::api::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query("INSERT INTO links (url, label, tags, project, created_at) VALUES (?, ?, '[]', '', ?)")
        .bind(url)
        .bind(url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_snapshot(
    pool: &SqlitePool,
    link_id: i64,
    content: &str,
    summary: &str,
    status: &str,
    checked_at: DateTime<Utc>,
) -> i64 {
    sqlx::query(
        "INSERT INTO snapshots (link_id, content, checked_at, diff_html, summary, status) \
         VALUES (?, ?, ?, '', ?, ?)",
    )
    .bind(link_id)
    .bind(content)
    .bind(checked_at)
    .bind(summary)
    .bind(status)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_snapshots(pool: &SqlitePool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM snapshots WHERE link_id = ?")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
