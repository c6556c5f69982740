use indexmap::IndexMap;

use crate::error::MarkdownError;

/// Attribute mapping rendered as ` key="value"` pairs in insertion order.
///
/// Equality ignores insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML output tree.
///
/// Trees are built once by the assembler and never mutated afterwards. Each
/// node owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A childless node that renders a value, optionally wrapped in a tag.
    Leaf(LeafNode),
    /// A tagged node that renders its children in order.
    Element(ElementNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    /// `None` renders the value verbatim with no surrounding tag.
    pub tag: Option<String>,
    /// Must be present when rendering; an empty string is fine.
    pub value: Option<String>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementNode {
    /// Must be non-empty when rendering.
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl HtmlNode {
    /// Untagged text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// Tagged leaf such as `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element(ElementNode {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Adds (or replaces) an attribute, keeping first-insertion order.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key.into(), value.into());
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Element(element) => Some(element.tag.as_str()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Element(_) => None,
        }
    }

    /// Children of an element; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Element(element) => &element.children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Element(element) => &element.attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.attributes,
            HtmlNode::Element(element) => &mut element.attributes,
        }
    }

    /// Serializes this node and its descendants to an HTML string.
    ///
    /// Values are emitted as-is; no escaping is performed.
    ///
    /// # Errors
    /// - [`MarkdownError::MissingValue`] if a leaf has no value
    /// - [`MarkdownError::MissingStructure`] if an element has an empty tag
    pub fn to_html(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), MarkdownError> {
        match self {
            HtmlNode::Leaf(leaf) => {
                let value = leaf.value.as_deref().ok_or(MarkdownError::MissingValue)?;
                match &leaf.tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        out.push('<');
                        out.push_str(tag);
                        out.push_str(&attributes_to_html(&leaf.attributes));
                        out.push('>');
                        out.push_str(value);
                        out.push_str("</");
                        out.push_str(tag);
                        out.push('>');
                    }
                }
            }
            HtmlNode::Element(element) => {
                if element.tag.is_empty() {
                    return Err(MarkdownError::MissingStructure {
                        reason: "element must have a tag",
                    });
                }
                out.push('<');
                out.push_str(&element.tag);
                out.push_str(&attributes_to_html(&element.attributes));
                out.push('>');
                for child in &element.children {
                    child.write_html(out)?;
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
        Ok(())
    }
}

/// Renders attributes as ` k1="v1" k2="v2"`, or an empty string when there are none.
pub fn attributes_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}
