use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/// A Markdown page relative to the content root, paired with its output path.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSource {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl PageSource {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    /// Create a new PageSource from a path relative to the content root
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = relative_path.with_extension(Self::OUTPUT_EXTENSION);
        Self {
            relative_path,
            output_path,
        }
    }

    /// Whether a path names a Markdown source file
    pub fn is_markdown(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == Self::SOURCE_EXTENSION)
    }

    /// Path of the Markdown source, relative to the content root
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Path of the generated page, relative to the output root
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }
}

impl From<RelativePathBuf> for PageSource {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PageSource {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
