//! Link entity representing a monitored URL.

use chrono::{DateTime, Utc};

/// A monitored URL with its display metadata.
///
/// Tags are free-form grouping strings; `project` is a coarser grouping used
/// by the dashboard frontend. The label falls back to the URL at creation time,
/// so it is always non-empty.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub label: String,
    pub tags: Vec<String>,
    pub project: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        url: String,
        label: String,
        tags: Vec<String>,
        project: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            label,
            tags,
            project,
            created_at,
        }
    }
}

/// Input data for registering a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub url: String,
    pub label: String,
    pub tags: Vec<String>,
    pub project: String,
}

/// Partial update for an existing link.
///
/// An explicit field-update set: `None` fields are left unchanged. The URL
/// itself is immutable once registered, since re-pointing a link would invalidate
/// its snapshot history.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub label: Option<String>,
    pub tags: Option<Vec<String>>,
    pub project: Option<String>,
}

impl LinkPatch {
    /// Returns true when no field is set, i.e. applying it is a no-op.
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.tags.is_none() && self.project.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "https://example.com".to_string(),
            "Example".to_string(),
            vec!["docs".to_string()],
            "infra".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.label, "Example");
        assert_eq!(link.tags, vec!["docs".to_string()]);
        assert_eq!(link.project, "infra");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(LinkPatch::default().is_empty());

        let patch = LinkPatch {
            label: Some("renamed".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
