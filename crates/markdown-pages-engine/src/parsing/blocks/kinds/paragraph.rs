/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// pattern matches. Their lines are joined into one inline run.
pub struct Paragraph;

impl Paragraph {
    pub fn content(block: &str) -> String {
        block.split('\n').collect::<Vec<_>>().join(" ")
    }
}
