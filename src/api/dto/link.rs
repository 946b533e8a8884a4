//! DTOs for link registration and management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, LinkPatch, SnapshotStatus};
use crate::domain::repositories::LinkOverview;

/// Request body for `POST /links`.
///
/// The http/https scheme rule is enforced by the link service; the DTO only
/// rejects the degenerate empty string early.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to monitor (must be plain HTTP or HTTPS).
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,

    /// Display name; defaults to the URL when absent.
    pub label: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub project: String,
}

/// Request body for `PATCH /links/{id}`.
///
/// All fields are optional; only provided fields are changed. The URL itself
/// cannot be updated.
#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    pub label: Option<String>,
    pub tags: Option<Vec<String>>,
    pub project: Option<String>,
}

impl UpdateLinkRequest {
    /// Converts the request into the explicit field-update set the domain
    /// layer applies.
    pub fn into_patch(self) -> LinkPatch {
        LinkPatch {
            label: self.label,
            tags: self.tags,
            project: self.project,
        }
    }
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub url: String,
    pub label: String,
    pub tags: Vec<String>,
    pub project: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            label: link.label,
            tags: link.tags,
            project: link.project,
            created_at: link.created_at,
        }
    }
}

/// A link annotated with its most recent check result, as returned by
/// `GET /links`. The `last_*` fields are `null` for never-checked links.
#[derive(Debug, Serialize)]
pub struct LinkOverviewResponse {
    pub id: i64,
    pub url: String,
    pub label: String,
    pub tags: Vec<String>,
    pub project: String,
    pub created_at: DateTime<Utc>,
    pub last_summary: Option<String>,
    pub last_status: Option<SnapshotStatus>,
    pub last_checked: Option<DateTime<Utc>>,
}

impl From<LinkOverview> for LinkOverviewResponse {
    fn from(overview: LinkOverview) -> Self {
        Self {
            id: overview.link.id,
            url: overview.link.url,
            label: overview.link.label,
            tags: overview.link.tags,
            project: overview.link.project,
            created_at: overview.link.created_at,
            last_summary: overview.last_summary,
            last_status: overview.last_status,
            last_checked: overview.last_checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_fails_validation() {
        let request = CreateLinkRequest {
            url: String::new(),
            label: None,
            tags: vec![],
            project: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_populated_url_passes_validation() {
        let request = CreateLinkRequest {
            url: "https://example.com".to_string(),
            label: None,
            tags: vec![],
            project: String::new(),
        };
        assert!(request.validate().is_ok());
    }
}
