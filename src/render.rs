//! Line-based diff rendering over the `similar` crate.
//!
//! The renderer is a pure function: two strings in, one human-readable diff
//! string out. An empty result means the inputs are identical — callers use
//! that as the "no differences" signal.

use similar::{ChangeTag, TextDiff};

use crate::logging::{green, red};

/// Number of unchanged context lines shown around each change group.
const CONTEXT_LINES: usize = 3;

/// Render a line diff between `old` and `new`.
///
/// Deletions are prefixed `-` (red when `color`), insertions `+` (green),
/// context lines two spaces. Distant change groups are separated by a
/// `---` marker line. Returns the empty string iff the inputs are equal.
#[must_use]
pub fn render_diff(old: &str, new: &str, color: bool) -> String {
    if old == new {
        return String::new();
    }

    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    for (group_index, group) in diff.grouped_ops(CONTEXT_LINES).iter().enumerate() {
        if group_index > 0 {
            out.push_str("---\n");
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let line = change.value().trim_end_matches(['\r', '\n']);
                let rendered = match change.tag() {
                    ChangeTag::Delete => red(&format!("- {line}"), color),
                    ChangeTag::Insert => green(&format!("+ {line}"), color),
                    ChangeTag::Equal => format!("  {line}"),
                };
                out.push_str(&rendered);
                out.push('\n');
            }
        }
    }

    out
}
