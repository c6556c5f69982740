use crate::error::MarkdownError;

use super::{
    kinds::Delimiter,
    split::{split_nodes_delimiter, split_nodes_image, split_nodes_link},
    types::InlineNode,
};

/// Tokenizes one run of inline text into a flat sequence of [`InlineNode`]s.
///
/// Starts from a single plain node and applies, in order: bold, italic and
/// code splitting, then image extraction, then link extraction. Later stages
/// only look inside nodes that are still plain.
///
/// # Errors
/// Propagates the first delimiter or span error from any stage.
pub fn text_to_inline_nodes(text: &str) -> Result<Vec<InlineNode>, MarkdownError> {
    let mut nodes = vec![InlineNode::plain(text)];
    for delimiter in Delimiter::PIPELINE {
        nodes = split_nodes_delimiter(nodes, delimiter)?;
    }
    let nodes = split_nodes_image(nodes)?;
    split_nodes_link(nodes)
}
