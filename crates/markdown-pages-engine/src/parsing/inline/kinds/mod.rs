//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Delimiter`**: `**` bold, `*` italic, `` ` `` code - symmetric span markers
//! - **`Image`** / **`Link`**: `![alt](url)` and `[text](url)` bracket/paren spans
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in splitter code.
//! The splitters call into these types; they never hardcode `**` or `](`.

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::{Image, Link};
