//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A monitored URL with metadata
//! - [`Snapshot`] - A point-in-time fetch result for a link
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewLink` and `NewSnapshot` for inserts, `LinkPatch` for partial updates.

pub mod link;
pub mod snapshot;

pub use link::{Link, LinkPatch, NewLink};
pub use snapshot::{NewSnapshot, Snapshot, SnapshotStatus};
