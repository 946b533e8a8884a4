//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Monitored-link CRUD operations
//! - [`SnapshotRepository`] - Snapshot storage, history, and retention

pub mod link_repository;
pub mod snapshot_repository;

pub use link_repository::{LinkOverview, LinkRepository};
pub use snapshot_repository::{RETENTION_LIMIT, SnapshotRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
