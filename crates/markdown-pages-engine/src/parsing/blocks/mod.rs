//! # Block Parsing
//!
//! Splits a document into top-level blocks and decides what each one is.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut on blank lines into
//!    trimmed block strings
//! 2. **Classification** (`classify`): each block string is matched against the
//!    block kinds in a fixed order, falling back to a paragraph
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types owning their syntax (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph), including content
//!   extraction used by the assembler
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_kind`
//!
//! ## Key Invariants
//!
//! - Lists and quotes do not nest; every line of the block must qualify
//! - A heading block is exactly one line
//! - Code fences must sit at the absolute start and end of the block

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_kind;
pub use segment::markdown_to_blocks;
pub use types::BlockKind;
