/// Discriminant of an [`InlineNode`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline content prior to HTML assembly.
///
/// Only `Link` and `Image` carry a URL; every variant carries text (display
/// text for links, alt text for images).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text not (yet) recognized as any styled construct.
    Plain(String),
    /// `**bold**`
    Bold(String),
    /// `*italic*`
    Italic(String),
    /// `` `code` ``
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl InlineNode {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineNode::Plain(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        InlineNode::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        InlineNode::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> InlineKind {
        match self {
            InlineNode::Plain(_) => InlineKind::Plain,
            InlineNode::Bold(_) => InlineKind::Bold,
            InlineNode::Italic(_) => InlineKind::Italic,
            InlineNode::Code(_) => InlineKind::Code,
            InlineNode::Link { .. } => InlineKind::Link,
            InlineNode::Image { .. } => InlineKind::Image,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            InlineNode::Plain(text)
            | InlineNode::Bold(text)
            | InlineNode::Italic(text)
            | InlineNode::Code(text)
            | InlineNode::Link { text, .. } => text,
            InlineNode::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            InlineNode::Link { url, .. } | InlineNode::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}
