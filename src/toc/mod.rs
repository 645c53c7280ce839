//! Table of contents and its navigation state.

mod slug;

pub use slug::{Slugger, slugify};

use reportview_types::{AnchorId, RenderedDocument, TocEntry};

/// Navigation entries for one rendered document.
///
/// At most one entry is active. Right after [`build`](Self::build) the first
/// entry is active, regardless of scroll position.
#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    entries: Vec<TocEntry>,
    active: Option<usize>,
}

impl TableOfContents {
    pub fn build(document: &RenderedDocument) -> Self {
        let entries = document.headings.clone();
        let active = if entries.is_empty() { None } else { Some(0) };
        Self { entries, active }
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active(&self) -> Option<&TocEntry> {
        self.active.and_then(|i| self.entries.get(i))
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn index_of(&self, anchor: &AnchorId) -> Option<usize> {
        self.entries.iter().position(|e| &e.target_id == anchor)
    }

    /// Marks entry `index` active and deactivates the previous one.
    ///
    /// Returns `false` (and changes nothing) for an out-of-range index.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    pub fn activate_anchor(&mut self, anchor: &AnchorId) -> bool {
        match self.index_of(anchor) {
            Some(i) => self.activate(i),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentRenderer, MarkdownRenderer};

    fn toc(source: &str) -> TableOfContents {
        let doc = MarkdownRenderer::new().render(source).unwrap();
        TableOfContents::build(&doc)
    }

    #[test]
    fn test_first_entry_active_after_build() {
        let toc = toc("# A\n## B\n## C");
        assert_eq!(toc.len(), 3);
        assert_eq!(toc.active_index(), Some(0));
        assert_eq!(toc.active().map(|e| e.text.as_str()), Some("A"));
    }

    #[test]
    fn test_empty_document_has_no_active_entry() {
        let toc = toc("just text");
        assert!(toc.is_empty());
        assert!(toc.active().is_none());
    }

    #[test]
    fn test_activate_moves_single_marker() {
        let mut toc = toc("# A\n## B\n## C");
        assert!(toc.activate(2));
        assert_eq!(toc.active_index(), Some(2));
        assert!(toc.activate_anchor(&AnchorId::from("b")));
        assert_eq!(toc.active_index(), Some(1));
    }

    #[test]
    fn test_activate_unknown_is_noop() {
        let mut toc = toc("# A\n## B");
        assert!(!toc.activate(9));
        assert!(!toc.activate_anchor(&AnchorId::from("missing")));
        assert_eq!(toc.active_index(), Some(0));
    }
}
