/// Bulleted list: every line starts with `- ` or `* `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn is_item(line: &str) -> bool {
        Self::MARKERS.iter().any(|marker| line.starts_with(marker))
    }

    /// Item text with the marker and its space removed.
    pub fn item_text(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}

/// Numbered list: line `n` (1-based) starts with `n. `.
pub struct OrderedList;

impl OrderedList {
    /// The prefix expected on the item with the given 1-based ordinal.
    pub fn prefix(ordinal: usize) -> String {
        format!("{ordinal}. ")
    }

    /// Whether every line carries its own ordinal, starting at 1 with no gaps.
    pub fn matches(lines: &[&str]) -> bool {
        lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::prefix(i + 1)))
    }

    /// Item text with the `n. ` prefix removed.
    pub fn item_text(line: &str, ordinal: usize) -> Option<&str> {
        line.strip_prefix(&Self::prefix(ordinal))
    }
}
