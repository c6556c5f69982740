/// The kind of a top-level block.
///
/// Each block is classified into exactly one kind; `Paragraph` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#`..`######` followed by a space, on a single line.
    Heading,
    /// Anything no other kind claims.
    Paragraph,
    /// Wrapped in ```` ``` ```` at the very start and end.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- ` or `* `.
    UnorderedList,
    /// Every line starts with its own ordinal: `1. `, `2. `, ...
    OrderedList,
}
