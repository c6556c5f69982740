use std::sync::OnceLock;

use regex::Regex;

/// Fenced code block: the whole block is wrapped in triple backticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    fn regex() -> &'static Regex {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_REGEX.get_or_init(|| Regex::new(r"(?s)\A```.*```\z").expect("Invalid code regex"))
    }

    /// Whether the block opens and closes with a fence at its very start and end.
    pub fn matches(block: &str) -> bool {
        Self::regex().is_match(block)
    }

    /// Text between the fences.
    ///
    /// Drops the opening fence plus the one character after it (the line break
    /// in the usual layout) and the closing fence. Returns `None` if the block
    /// is not fenced.
    pub fn content(block: &str) -> Option<&str> {
        if !Self::matches(block) {
            return None;
        }
        let inner = block
            .strip_prefix(Self::BACKTICKS)?
            .strip_suffix(Self::BACKTICKS)?;
        let mut chars = inner.chars();
        chars.next();
        Some(chars.as_str())
    }
}
