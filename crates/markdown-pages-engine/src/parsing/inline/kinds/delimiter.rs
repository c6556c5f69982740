use crate::parsing::inline::types::InlineNode;

/// A symmetric inline delimiter and the node kind it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Order in which delimiters are split out of plain text.
    ///
    /// Bold must precede italic so `**x**` is not read as two empty italics.
    pub const PIPELINE: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    /// Wraps text found between a pair of this delimiter.
    pub fn wrap(self, text: impl Into<String>) -> InlineNode {
        let text = text.into();
        match self {
            Delimiter::Bold => InlineNode::Bold(text),
            Delimiter::Italic => InlineNode::Italic(text),
            Delimiter::Code => InlineNode::Code(text),
        }
    }
}
