//! DTO for the check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::CheckOutcome;

/// Response for `POST /links/{id}/check`.
///
/// Uses an untagged enum so a completed check and a failed fetch serialize to
/// their distinct shapes without a discriminator field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    Completed {
        status: &'static str,
        changed: bool,
        diff_html: String,
        summary: String,
        checked_at: DateTime<Utc>,
    },
    Failed {
        status: &'static str,
        summary: String,
    },
}

impl From<CheckOutcome> for CheckResponse {
    fn from(outcome: CheckOutcome) -> Self {
        match outcome {
            CheckOutcome::Completed {
                changed,
                diff_html,
                summary,
                checked_at,
            } => CheckResponse::Completed {
                status: "ok",
                changed,
                diff_html,
                summary,
                checked_at,
            },
            CheckOutcome::Failed { summary } => CheckResponse::Failed {
                status: "error",
                summary,
            },
        }
    }
}
