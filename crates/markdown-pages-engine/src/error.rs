use crate::parsing::inline::InlineKind;

/// Errors raised while converting Markdown to HTML.
///
/// Every variant is fatal: conversion stops at the first failure and no
/// partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("invalid text: need closing delimiter `{delimiter}`")]
    UnclosedDelimiter { delimiter: &'static str },
    #[error("invalid markdown, {kind:?} section not closed: [{text}]({url})")]
    UnclosedSpan {
        kind: InlineKind,
        text: String,
        url: String,
    },
    #[error("block could not be classified: {block:?}")]
    UnclassifiableBlock { block: String },
    #[error("leaf nodes must have a value")]
    MissingValue,
    #[error("element node is malformed: {reason}")]
    MissingStructure { reason: &'static str },
    #[error("markdown has no h1 header")]
    MissingTitle,
}
