use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#`, a single space, then the heading text on one line.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    fn regex() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX
            .get_or_init(|| Regex::new(r"\A(#{1,6}) .*\z").expect("Invalid heading regex"))
    }

    /// Whether the whole block is a single-line heading.
    pub fn matches(block: &str) -> bool {
        Self::regex().is_match(block)
    }

    /// Returns the heading level and the text after `#... `.
    ///
    /// `None` if the block is not a heading.
    pub fn parse(block: &str) -> Option<(u8, &str)> {
        let caps = Self::regex().captures(block)?;
        let hashes = caps.get(1)?.as_str().len();
        let level = u8::try_from(hashes).ok()?;
        Some((level, &block[hashes + 1..]))
    }
}
