//! LLM summarization integrations.

pub mod groq_summarizer;

pub use groq_summarizer::{GroqSummarizer, NO_CHANGES_SUMMARY, UNAVAILABLE_SUMMARY};
