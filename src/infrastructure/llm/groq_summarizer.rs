//! Diff narration through Groq's OpenAI-compatible chat-completions API.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::{Client, config::OpenAIConfig};
use async_trait::async_trait;
use regex::Regex;

use crate::domain::summarizer::Summarizer;

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const MODEL: &str = "llama-3.1-8b-instant";

/// Diff text is truncated to this many characters before prompting.
const MAX_DIFF_CHARS: usize = 3_000;
const MAX_SUMMARY_TOKENS: u32 = 300;

/// Returned when no credential is configured; no network call is made.
pub const UNAVAILABLE_SUMMARY: &str =
    "LLM summary unavailable: set GROQ_API_KEY in the environment";

/// Returned for an empty diff; no network call is made.
pub const NO_CHANGES_SUMMARY: &str = "No changes detected since last check.";

const SYSTEM_PROMPT: &str = "You are a concise change analyst. Your task is to summarize changes \
on a webpage in 1-2 flowing, human-readable sentences in a single paragraph.\n\n\
RULES:\n\
1. Output PLAIN TEXT ONLY. Strictly NO HTML tags.\n\
2. Include relevant CITATIONS or SNIPPETS (like specific price changes, new version numbers, or \
key text updates) from the diff where appropriate to provide context.\n\
3. Combine all changes into a single flowing narrative.\n\
4. Use connecting words like 'while', 'and', or 'additionally' to bridge related changes.\n\
5. DO NOT use technical formatting or diff symbols (+, -, @@).";

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Leading runs of diff/bullet symbols at line starts.
static LINE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[+\-•*@]+").unwrap());

/// Summarizer backed by Groq's text-completion service.
///
/// Constructed without a credential it degrades to fixed placeholder
/// messages; no request ever leaves the process in that state.
pub struct GroqSummarizer {
    client: Option<Client<OpenAIConfig>>,
    api_key: String,
}

impl GroqSummarizer {
    /// Creates the summarizer. `api_key: None` (or an empty key) disables the
    /// external service entirely.
    pub fn new(api_key: Option<String>) -> Self {
        match api_key.filter(|key| !key.is_empty()) {
            Some(key) => {
                let config = OpenAIConfig::new()
                    .with_api_key(key.clone())
                    .with_api_base(GROQ_API_BASE);
                Self {
                    client: Some(Client::with_config(config)),
                    api_key: key,
                }
            }
            None => Self {
                client: None,
                api_key: String::new(),
            },
        }
    }

    async fn complete(
        &self,
        client: &Client<OpenAIConfig>,
        url: &str,
        snippet: &str,
    ) -> Result<String> {
        let user_prompt = format!(
            "URL: {url}\n\nRecent Changes (Diff):\n{snippet}\n\n\
             Provide a human-readable summary with citations/snippets (single paragraph):"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .max_tokens(MAX_SUMMARY_TOKENS)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = client.chat().create(request).await?;
        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .context("completion response missing content")
    }
}

#[async_trait]
impl Summarizer for GroqSummarizer {
    async fn summarize(&self, url: &str, diff_text: &str) -> String {
        // An empty diff short-circuits before the credential check: "nothing
        // changed" is known without the external service either way.
        if diff_text.is_empty() {
            return NO_CHANGES_SUMMARY.to_string();
        }
        let Some(client) = &self.client else {
            return UNAVAILABLE_SUMMARY.to_string();
        };

        let snippet: String = diff_text.chars().take(MAX_DIFF_CHARS).collect();

        match self.complete(client, url, &snippet).await {
            Ok(raw) => sanitize_summary(&raw),
            Err(e) => {
                tracing::warn!(url, "Summarization failed: {e:#}");
                format!("LLM error: {}", redact(&e.to_string(), &self.api_key))
            }
        }
    }
}

/// Strips markup and diff syntax the model was told not to produce but
/// sometimes produces anyway.
fn sanitize_summary(raw: &str) -> String {
    let without_tags = HTML_TAG_RE.replace_all(raw, "");
    let without_prefixes = LINE_PREFIX_RE.replace_all(&without_tags, "");
    without_prefixes
        .replace('+', "")
        .replace('-', "")
        .replace("@@", "")
        .trim()
        .to_string()
}

/// Masks the credential if it appears verbatim in an error message. Short
/// keys are left alone; masking fragments of unrelated text is worse than
/// the low odds of a real key under 10 characters.
fn redact(message: &str, api_key: &str) -> String {
    if api_key.len() > 10 {
        message.replace(api_key, "[MASKED_KEY]")
    } else {
        message.to_string()
    }
}
