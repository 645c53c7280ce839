use crate::ids::AnchorId;

/// An entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1 = h1, 2 = h2, etc.)
    pub level: u8,
    /// The text content of the heading.
    pub text: String,
    /// The anchor ID to link to this heading.
    pub target_id: AnchorId,
    /// Zero-based position of the heading among all collected headings.
    pub position: usize,
}

/// A document after Markdown has been turned into HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    /// HTML fragment for the view container. Headings carry `id` attributes.
    pub html: String,
    /// Headings of levels 1 to 4, in document order.
    pub headings: Vec<TocEntry>,
}

impl RenderedDocument {
    pub fn heading_ids(&self) -> impl Iterator<Item = &AnchorId> {
        self.headings.iter().map(|h| &h.target_id)
    }
}
