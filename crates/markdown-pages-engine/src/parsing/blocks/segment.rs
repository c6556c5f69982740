/// Separator between blocks: an empty line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into blocks separated by one or more blank lines.
///
/// Each block is trimmed of surrounding whitespace and empty blocks are dropped.
/// Line endings must already be `\n`.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
