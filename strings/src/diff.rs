//! Line diff between two texts.

use similar::{ChangeTag, TextDiff};

/// Unified-style line diff: `-` removed, `+` added, two spaces unchanged.
pub fn diff_lines(old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "- ",
            ChangeTag::Insert => "+ ",
            ChangeTag::Equal => "  ",
        };
        out.push_str(sign);
        out.push_str(change.value().trim_end_matches('\n'));
        out.push('\n');
    }
    out
}

/// True when both texts are line-for-line identical.
pub fn is_identical(old: &str, new: &str) -> bool {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .all(|change| change.tag() == ChangeTag::Equal)
}
