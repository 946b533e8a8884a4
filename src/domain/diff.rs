//! Line-based unified diffing between two text snapshots.
//!
//! Two renderings of the same comparison are produced:
//!
//! - [`render_markup`] - span-tagged form stored on the snapshot and shown by
//!   the frontend, with 3 lines of context per hunk
//! - [`render_plain`] - raw unified diff with 1 line of context, fed to the
//!   summarizer as prompt material
//!
//! Both return the empty string when the texts are identical; downstream logic
//! treats an empty render as "unchanged". An empty old text against a
//! non-empty new text yields a diff that is entirely additions: the first
//! check of a link diffs against an empty baseline, there is no special case
//! for it.

use similar::{DiffTag, TextDiff};

/// Context lines per hunk in the markup rendering.
const MARKUP_CONTEXT: usize = 3;

/// Context lines per hunk in the plain rendering used as summarizer input.
const PLAIN_CONTEXT: usize = 1;

/// Renders the diff between `old` and `new` as span-tagged markup.
///
/// Each unified-diff line is wrapped according to its prefix: `+` lines as
/// additions, `-` lines as removals, `@@` hunk headers, everything else as
/// context. The line text keeps its diff-symbol prefix. The `---`/`+++`
/// file headers are omitted entirely.
pub fn render_markup(old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    if is_unchanged(&diff) {
        return String::new();
    }

    let mut unified = diff.unified_diff();
    unified
        .context_radius(MARKUP_CONTEXT)
        .missing_newline_hint(false);

    unified
        .to_string()
        .lines()
        .map(tag_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the diff between `old` and `new` as plain unified-diff text.
pub fn render_plain(old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    if is_unchanged(&diff) {
        return String::new();
    }

    let mut unified = diff.unified_diff();
    unified
        .context_radius(PLAIN_CONTEXT)
        .header("previous", "current")
        .missing_newline_hint(false);

    unified.to_string()
}

fn is_unchanged(diff: &TextDiff<'_, '_, '_, str>) -> bool {
    diff.ops().iter().all(|op| op.tag() == DiffTag::Equal)
}

fn tag_line(line: &str) -> String {
    if line.starts_with("@@") {
        format!("<span class=\"diff-hunk\">{line}</span>")
    } else if line.starts_with('+') {
        format!("<span class=\"diff-add\">{line}</span>")
    } else if line.starts_with('-') {
        format!("<span class=\"diff-remove\">{line}</span>")
    } else {
        format!("<span class=\"diff-ctx\">{line}</span>")
    }
}
