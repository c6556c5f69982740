//! # Inline Parsing
//!
//! Turns one inline string (a heading's text, a paragraph, a list item) into a
//! flat sequence of typed [`InlineNode`]s.
//!
//! ## Pipeline
//!
//! Tokenizing is a fixed sequence of stages over a `Vec<InlineNode>`. Each
//! stage only rewrites `Plain` nodes; anything already styled passes through.
//!
//! 1. Split `**` into `Bold`
//! 2. Split `*` into `Italic`
//! 3. Split `` ` `` into `Code`
//! 4. Extract `![alt](url)` into `Image`
//! 5. Extract `[text](url)` into `Link`
//!
//! Emphasis does not nest: the text of a styled node is never re-tokenized.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum and its `InlineKind` discriminant
//! - **`kinds`**: Inline-specific types with owned delimiters (`Delimiter`, `Image`, `Link`)
//! - **`split`**: One function per pipeline stage plus the image/link extractors
//! - **`parser`**: `text_to_inline_nodes()` main entry point

pub mod kinds;
pub mod parser;
pub mod split;
pub mod types;

pub use kinds::Delimiter;
pub use parser::text_to_inline_nodes;
pub use split::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link,
};
pub use types::{InlineKind, InlineNode};
