/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or assembler code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// A quote line only needs to start with `>`; a following space is optional.
    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips every leading `>` and then surrounding whitespace.
    ///
    /// Handles `> text`, `>text` and `>> nested` alike; nesting is flattened.
    pub fn strip_prefixes(line: &str) -> &str {
        line.trim_start_matches(Self::PREFIX).trim()
    }

    /// Joins the stripped lines of a quote block with single spaces.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefixes)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
