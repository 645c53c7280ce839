//! Reportview resolves product-analysis reports from layered sources, renders
//! their Markdown to HTML with a navigable table of contents, and keeps the
//! active TOC entry in sync with the reading position.

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod navigation;
pub mod scroll;
pub mod toc;
pub mod viewer;

pub use config::ViewerConfig;
pub use document::{DocumentRenderer, HtmlPage, MarkdownRenderer};
pub use entry::{EntryError, Marketplace, SearchEntry};
pub use error::ViewerError;
pub use navigation::Navigator;
pub use scroll::{ScrollSpy, ScrollSpyConfig};
pub use toc::{Slugger, TableOfContents, slugify};
pub use viewer::{ReportViewer, ReportViewerBuilder, ResolvedReport, report_id_from_query};

pub use reportview_resource::{
    FilesystemResourceProvider, HttpResourceProvider, InMemoryResourceProvider, provider_for,
};
pub use reportview_source::{LocalStore, ReportSource, SourceError};
pub use reportview_traits::{
    ErrorKind, ErrorView, Link, RenderTarget, ResourceError, ResourceProvider, ViewState,
};
pub use reportview_types::{AnchorId, Band, RenderedDocument, ReportId, ReportRecord, Span, TocEntry};
