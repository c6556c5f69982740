//! # HTML Node Model
//!
//! The output side of the conversion pipeline: a small owned tree of
//! [`HtmlNode`]s that serializes itself with [`HtmlNode::to_html`].
//!
//! - **Leaves** render a value, optionally wrapped in a tag with attributes
//!   (`<a href="...">text</a>`), or verbatim when untagged.
//! - **Elements** render a tag around the serialization of their children.

pub mod node;

pub use node::{Attributes, ElementNode, HtmlNode, LeafNode, attributes_to_html};
