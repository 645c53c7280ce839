use crate::ids::ReportId;
use serde::{Deserialize, Serialize};

/// Metadata and content reference for one generated report.
///
/// Records arrive from the local store, a preloaded collection, or the remote
/// index. Unknown fields are ignored so that index files written by other
/// tools (which carry e.g. `asin` or `status`) still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: ReportId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    /// Raw Markdown, when the record carries its document inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Location of the document when it is not inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_path: Option<String>,
}

impl ReportRecord {
    pub fn new(id: impl Into<ReportId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at: String::new(),
            content: None,
            markdown_path: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_markdown_path(mut self, path: impl Into<String>) -> Self {
        self.markdown_path = Some(path.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Inline content, if present. An empty string counts as present.
    pub fn inline_content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// A record with neither inline content nor a path can never be displayed.
    pub fn is_usable(&self) -> bool {
        self.content.is_some()
            || self
                .markdown_path
                .as_deref()
                .is_some_and(|p| !p.trim().is_empty())
    }

    /// Title for display, falling back to the id when the record has none.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.title
        }
    }
}
