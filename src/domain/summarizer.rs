//! Trait seam for narrating a diff in prose.

use async_trait::async_trait;

/// Produces a one-paragraph human-readable summary of a diff.
///
/// Summarization is best-effort and infallible from the caller's point of
/// view: every failure mode (missing credential, service error, malformed
/// response) is folded into the returned string rather than surfaced as an
/// error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `diff_text` (plain unified diff) for the page at `url`.
    async fn summarize(&self, url: &str, diff_text: &str) -> String;
}
