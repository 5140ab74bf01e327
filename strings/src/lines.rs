//! Line-oriented operations: sort, unique, blank removal, joining.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

pub fn sort_lines(input: &str, order: SortOrder) -> String {
    let mut lines: Vec<&str> = input.lines().collect();
    lines.sort_unstable();
    if order == SortOrder::Descending {
        lines.reverse();
    }
    lines.join("\n")
}

/// Keeps the first occurrence of each line.
pub fn unique_lines(input: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    input
        .lines()
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn remove_blank_lines(input: &str) -> String {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapses runs of spaces and tabs within each line and trims the ends.
pub fn normalize_spaces(input: &str) -> String {
    input
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins lines with a delimiter. `\n` and `\t` escapes in the delimiter are
/// interpreted.
pub fn join_lines(input: &str, delimiter: &str, trim_items: bool, skip_empty: bool) -> String {
    let delimiter = delimiter.replace("\\n", "\n").replace("\\t", "\t");
    input
        .lines()
        .map(|line| if trim_items { line.trim() } else { line })
        .filter(|line| !skip_empty || !line.is_empty())
        .collect::<Vec<_>>()
        .join(&delimiter)
}
