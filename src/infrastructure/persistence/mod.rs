//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval
//! - [`SqliteSnapshotRepository`] - Snapshot storage, history, and retention

pub mod sqlite_link_repository;
pub mod sqlite_snapshot_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_snapshot_repository::SqliteSnapshotRepository;
