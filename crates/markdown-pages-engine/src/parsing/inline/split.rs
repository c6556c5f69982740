use crate::error::MarkdownError;

use super::{
    kinds::{Delimiter, Image, Link},
    types::{InlineKind, InlineNode},
};

/// Splits every plain node on `delimiter`, turning delimited runs into styled nodes.
///
/// Segments alternate plain/styled starting with plain; empty segments are
/// dropped. Non-plain nodes pass through untouched.
///
/// # Errors
/// [`MarkdownError::UnclosedDelimiter`] if a plain node holds an odd number of
/// delimiters.
pub fn split_nodes_delimiter(
    nodes: Vec<InlineNode>,
    delimiter: Delimiter,
) -> Result<Vec<InlineNode>, MarkdownError> {
    let marker = delimiter.as_str();
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        let InlineNode::Plain(text) = node else {
            out.push(node);
            continue;
        };

        if text.matches(marker).count() % 2 == 1 {
            return Err(MarkdownError::UnclosedDelimiter { delimiter: marker });
        }

        for (i, segment) in text.split(marker).enumerate() {
            if segment.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineNode::plain(segment));
            } else {
                out.push(delimiter.wrap(segment));
            }
        }
    }

    Ok(out)
}

/// Returns `(alt, url)` pairs for each `![alt](url)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    Image::extract(text)
}

/// Returns `(text, url)` pairs for each `[text](url)` in `text` that is not an image.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    Link::extract(text)
}

/// Splits image spans out of plain nodes.
///
/// # Errors
/// [`MarkdownError::UnclosedSpan`] if an extracted image cannot be found
/// literally in the remaining text.
pub fn split_nodes_image(nodes: Vec<InlineNode>) -> Result<Vec<InlineNode>, MarkdownError> {
    split_nodes_spans(nodes, InlineKind::Image)
}

/// Splits link spans out of plain nodes.
///
/// # Errors
/// [`MarkdownError::UnclosedSpan`] if an extracted link cannot be found
/// literally in the remaining text.
pub fn split_nodes_link(nodes: Vec<InlineNode>) -> Result<Vec<InlineNode>, MarkdownError> {
    split_nodes_spans(nodes, InlineKind::Link)
}

fn split_nodes_spans(
    nodes: Vec<InlineNode>,
    kind: InlineKind,
) -> Result<Vec<InlineNode>, MarkdownError> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        let InlineNode::Plain(text) = node else {
            out.push(node);
            continue;
        };

        let matches = match kind {
            InlineKind::Image => extract_markdown_images(&text),
            _ => extract_markdown_links(&text),
        };

        let mut rest = text.as_str();
        for (label, url) in matches {
            let literal = match kind {
                InlineKind::Image => Image::markdown(label, url),
                _ => Link::markdown(label, url),
            };
            let Some((before, after)) = rest.split_once(&literal) else {
                return Err(MarkdownError::UnclosedSpan {
                    kind,
                    text: label.to_string(),
                    url: url.to_string(),
                });
            };
            if !before.is_empty() {
                out.push(InlineNode::plain(before));
            }
            out.push(match kind {
                InlineKind::Image => InlineNode::image(label, url),
                _ => InlineNode::link(label, url),
            });
            rest = after;
        }

        if !rest.is_empty() {
            out.push(InlineNode::plain(rest));
        }
    }

    Ok(out)
}
