/// Marker replaced by the page title.
pub const TITLE_MARKER: &str = "{{ Title }}";
/// Marker replaced by the converted page body.
pub const CONTENT_MARKER: &str = "{{ Content }}";

/// A page template containing `{{ Title }}` and `{{ Content }}` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replaces every occurrence of both markers verbatim.
    ///
    /// Missing markers are not an error.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.text
            .replace(TITLE_MARKER, title)
            .replace(CONTENT_MARKER, content)
    }
}
