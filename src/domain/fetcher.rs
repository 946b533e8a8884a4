//! Trait seam for retrieving a page's normalized text content.

use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a page fetch.
///
/// A fetch failure never aborts a check: the caller records it as an
/// error-status snapshot with the failure message as its summary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// Retrieves a URL's rendered markup and reduces it to normalized plain text.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageFetcher`] - reqwest-based fetcher
/// - Test stubs implement this trait to return canned content
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs an HTTP GET and returns the page reduced to plain text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request errors, times out, or the
    /// response status is not 2xx.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
