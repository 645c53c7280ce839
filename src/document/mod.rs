//! Turning report Markdown into a displayable document, and displaying it.

pub mod markdown;
pub mod page;

pub use markdown::MarkdownRenderer;
pub use page::HtmlPage;

use crate::error::ViewerError;
use reportview_types::RenderedDocument;

/// Deepest heading level that receives an anchor and a TOC entry.
pub const MAX_TOC_LEVEL: u8 = 4;

/// A rendering engine for report documents.
pub trait DocumentRenderer: Send + Sync {
    /// Renders `source` to an HTML fragment with anchored headings.
    ///
    /// Raw HTML embedded in the source must come out escaped.
    fn render(&self, source: &str) -> Result<RenderedDocument, ViewerError>;

    fn name(&self) -> &'static str;
}
