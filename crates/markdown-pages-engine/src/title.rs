use crate::error::MarkdownError;

/// Prefix of a level-1 heading line. Exactly one `#`, unlike heading blocks.
pub const TITLE_PREFIX: &str = "# ";

/// Returns the trimmed text of the first line starting with `# `.
///
/// # Errors
/// [`MarkdownError::MissingTitle`] if no line qualifies.
pub fn extract_title(markdown: &str) -> Result<&str, MarkdownError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(str::trim)
        .ok_or(MarkdownError::MissingTitle)
}
