//! RenderTarget trait: the seam between the viewer and whatever displays it.
//!
//! The resolution and rendering algorithm only ever talks to a target, so it
//! can be driven against a recording double in tests and against a static
//! HTML page in the binary.

use reportview_types::{AnchorId, RenderedDocument};
use std::fmt;

/// The four terminal failure states a view can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The identifier matched no record in any source.
    NotFound,
    /// A record matched but its document could not be fetched.
    ContentUnavailable,
    /// No document renderer is installed.
    RendererUnavailable,
    /// Anything else.
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not-found",
            ErrorKind::ContentUnavailable => "content-unavailable",
            ErrorKind::RendererUnavailable => "renderer-unavailable",
            ErrorKind::Unexpected => "unexpected",
        };
        f.write_str(s)
    }
}

/// A hyperlink shown next to an error (e.g. back to the report listing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// Everything a target needs to draw a terminal error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub kind: ErrorKind,
    pub message: String,
    pub recovery: Option<Link>,
}

/// What a target is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Loading,
    Content,
    Error(ErrorKind),
}

pub trait RenderTarget {
    /// Replaces the view with the rendered document. Any previous content,
    /// including the loading placeholder, is discarded.
    fn set_content(&mut self, document: &RenderedDocument);

    /// Replaces the view with a terminal error state.
    fn set_error(&mut self, error: &ErrorView);

    /// Updates the page title and breadcrumb label.
    fn set_title(&mut self, title: &str);

    /// Marks one navigation entry active, or clears the mark.
    fn set_active_entry(&mut self, _entry: Option<&AnchorId>) {}

    /// Requests that the document scrolls the given heading into view.
    fn scroll_to(&mut self, _anchor: &AnchorId) {}

    /// Requests that the table-of-contents panel scrolls to `offset`.
    fn scroll_toc_to(&mut self, _offset: f32) {}
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_content(&mut self, document: &RenderedDocument) {
        (**self).set_content(document)
    }

    fn set_error(&mut self, error: &ErrorView) {
        (**self).set_error(error)
    }

    fn set_title(&mut self, title: &str) {
        (**self).set_title(title)
    }

    fn set_active_entry(&mut self, entry: Option<&AnchorId>) {
        (**self).set_active_entry(entry)
    }

    fn scroll_to(&mut self, anchor: &AnchorId) {
        (**self).scroll_to(anchor)
    }

    fn scroll_toc_to(&mut self, offset: f32) {
        (**self).scroll_toc_to(offset)
    }
}
