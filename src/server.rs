//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, component wiring, and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::application::services::{CheckService, LinkService};
use crate::config::Config;
use crate::domain::fetcher::PageFetcher;
use crate::domain::summarizer::Summarizer;
use crate::infrastructure::http::HttpPageFetcher;
use crate::infrastructure::llm::GroqSummarizer;
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteSnapshotRepository};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if absent)
/// - Migrations
/// - Repositories, page fetcher, summarizer, and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let snapshot_repository = Arc::new(SqliteSnapshotRepository::new(pool.clone()));

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpPageFetcher::new()?);
    let summarizer: Arc<dyn Summarizer> =
        Arc::new(GroqSummarizer::new(config.groq_api_key.clone()));
    if config.is_llm_enabled() {
        tracing::info!("Summarization enabled");
    } else {
        tracing::warn!("GROQ_API_KEY not set; summaries will be placeholders");
    }

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        snapshot_repository.clone(),
    ));
    let check_service = Arc::new(CheckService::new(
        link_repository,
        snapshot_repository,
        fetcher,
        summarizer,
    ));

    let state = AppState {
        db: pool,
        link_service,
        check_service,
        llm_configured: config.is_llm_enabled(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
