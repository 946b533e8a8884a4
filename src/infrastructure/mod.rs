//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for persistence and the two outbound services.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`http`] - reqwest-based page fetching
//! - [`llm`] - Groq-backed diff summarization

pub mod http;
pub mod llm;
pub mod persistence;
