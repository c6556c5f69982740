pub mod error;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod template;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode};
pub use io::*;
pub use models::PageSource;
pub use parsing::{
    BlockKind, InlineNode, block_to_block_kind, markdown_to_blocks, text_to_inline_nodes,
};
pub use render::{
    inline_node_to_html_node, markdown_to_html, markdown_to_html_node, render_page,
    text_to_children,
};
pub use template::Template;
pub use title::extract_title;
