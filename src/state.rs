use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{CheckService, LinkService};
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteSnapshotRepository};

/// Concrete service types wired against the SQLite repositories.
pub type AppLinkService = LinkService<SqliteLinkRepository, SqliteSnapshotRepository>;
pub type AppCheckService = CheckService<SqliteLinkRepository, SqliteSnapshotRepository>;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub link_service: Arc<AppLinkService>,
    pub check_service: Arc<AppCheckService>,
    /// Whether a summarization credential was configured at startup; the
    /// health probe reports it without touching the external service.
    pub llm_configured: bool,
}
