//! # Markdown Parsing
//!
//! The front half of the conversion pipeline. Nothing here knows about HTML.
//!
//! - **`blocks`**: document → trimmed block strings → [`blocks::BlockKind`]
//! - **`inline`**: inline string → [`inline::InlineNode`] sequence

pub mod blocks;
pub mod inline;

pub use blocks::{BlockKind, block_to_block_kind, markdown_to_blocks};
pub use inline::{InlineNode, text_to_inline_nodes};
