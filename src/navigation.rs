//! Keeps the table of contents, the scroll spy and the render target in step.

use crate::scroll::{ScrollSpy, ScrollSpyConfig, nearest_scroll_offset};
use crate::toc::TableOfContents;
use log::trace;
use reportview_traits::RenderTarget;
use reportview_types::{AnchorId, RenderedDocument, Span};

/// Geometry of the scrollable TOC panel.
#[derive(Debug, Clone, Default)]
struct TocPanel {
    entry_spans: Vec<Span>,
    height: f32,
    scroll_top: f32,
}

/// Navigation state for one rendered document.
///
/// Rebuilt on every render; nothing carries over between documents.
#[derive(Debug, Clone)]
pub struct Navigator {
    toc: TableOfContents,
    spy: Option<ScrollSpy>,
    panel: Option<TocPanel>,
    spy_config: ScrollSpyConfig,
}

impl Navigator {
    pub fn new(document: &RenderedDocument, spy_config: ScrollSpyConfig) -> Self {
        Self {
            toc: TableOfContents::build(document),
            spy: None,
            panel: None,
            spy_config,
        }
    }

    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    pub fn active(&self) -> Option<&AnchorId> {
        self.toc.active().map(|e| &e.target_id)
    }

    /// Supplies laid-out heading positions, one per TOC entry, in order.
    /// Starts observing scroll positions.
    pub fn observe_headings(&mut self, spans: &[Span]) {
        let observed = self
            .toc
            .entries()
            .iter()
            .zip(spans.iter())
            .map(|(entry, span)| (entry.target_id.clone(), *span));
        self.spy = Some(ScrollSpy::new(self.spy_config, observed));
    }

    /// Supplies the TOC panel layout: entry positions within the panel, the
    /// panel's visible height and its current scroll offset.
    pub fn observe_panel(&mut self, entry_spans: &[Span], height: f32, scroll_top: f32) {
        self.panel = Some(TocPanel {
            entry_spans: entry_spans.to_vec(),
            height,
            scroll_top,
        });
    }

    /// A navigation link was clicked: scroll to its heading and mark it active.
    pub fn click(&mut self, anchor: &AnchorId, target: &mut dyn RenderTarget) -> bool {
        let Some(index) = self.toc.index_of(anchor) else {
            return false;
        };
        target.scroll_to(anchor);
        self.activate(index, target);
        true
    }

    /// The document was scrolled. Returns the newly activated anchor, if any.
    pub fn scroll(
        &mut self,
        scroll_top: f32,
        viewport_height: f32,
        target: &mut dyn RenderTarget,
    ) -> Option<AnchorId> {
        let anchor = self.spy.as_mut()?.observe(scroll_top, viewport_height)?;
        let index = self.toc.index_of(&anchor)?;
        self.activate(index, target);
        Some(anchor)
    }

    /// Announces the initial active entry to the target.
    pub fn publish(&self, target: &mut dyn RenderTarget) {
        target.set_active_entry(self.active());
    }

    fn activate(&mut self, index: usize, target: &mut dyn RenderTarget) {
        if !self.toc.activate(index) {
            return;
        }
        let anchor = self.toc.entries()[index].target_id.clone();
        trace!("Active TOC entry: {}", anchor);
        target.set_active_entry(Some(&anchor));

        if let Some(panel) = self.panel.as_mut()
            && let Some(span) = panel.entry_spans.get(index)
            && let Some(offset) = nearest_scroll_offset(*span, panel.scroll_top, panel.height)
        {
            panel.scroll_top = offset;
            target.scroll_toc_to(offset);
        }
    }
}
