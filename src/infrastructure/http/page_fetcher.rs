//! reqwest-based page fetcher with browser-like request shaping.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::domain::fetcher::{FetchError, PageFetcher};

/// Per-request timeout. A page that takes longer than this is recorded as a
/// failed check.
const FETCH_TIMEOUT_SECS: u64 = 15;

/// Normalized text is cut at this many characters before storage.
const MAX_CONTENT_CHARS: usize = 50_000;

/// Desktop Chrome user agent. Several sites serve bot-hostile or empty
/// responses to unknown agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Elements removed together with their contents before tag stripping.
static NOISE_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>|<nav[^>]*>.*?</nav>|<footer[^>]*>.*?</footer>",
    )
    .unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Fetches pages over HTTP and reduces them to normalized plain text.
///
/// The client negotiates up to HTTP/2, follows redirects, and presents
/// browser-like headers; some monitored sites refuse plain bot requests.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Builds the fetcher with its long-lived HTTP client.
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(header::DNT, HeaderValue::from_static("1"));
        headers.insert(
            header::UPGRADE_INSECURE_REQUESTS,
            HeaderValue::from_static("1"),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(classify_error)?;
        Ok(normalize_html(&body))
    }
}

fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(FETCH_TIMEOUT_SECS)
    } else {
        FetchError::Transport(e.to_string())
    }
}

/// Reduces raw markup to comparable plain text.
///
/// Scripts, styles, navigation and footers are dropped with their contents,
/// remaining tags are stripped, whitespace runs collapse to single spaces,
/// and the result is trimmed and truncated to [`MAX_CONTENT_CHARS`].
pub fn normalize_html(raw: &str) -> String {
    let without_noise = NOISE_ELEMENT_RE.replace_all(raw, " ");
    let without_tags = TAG_RE.replace_all(&without_noise, " ");
    let collapsed = WHITESPACE_RE.replace_all(&without_tags, " ");
    collapsed.trim().chars().take(MAX_CONTENT_CHARS).collect()
}
