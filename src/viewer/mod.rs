//! The report viewer: resolve an id, render the document, drive navigation.

mod builder;
pub mod sample;

pub use builder::ReportViewerBuilder;

use crate::config::ViewerConfig;
use crate::document::DocumentRenderer;
use crate::error::ViewerError;
use crate::navigation::Navigator;
use log::{debug, error, info, warn};
use reportview_source::LayeredIndex;
use reportview_traits::{ErrorKind, RenderTarget, ResourceProvider, ViewState};
use reportview_types::{AnchorId, ReportId, ReportRecord, Span};
use std::sync::Arc;

/// Query parameter carrying the report id on the viewer page.
pub const REPORT_ID_PARAM: &str = "id";

/// Extracts the report id from a query string (`?id=abc&x=1` or `id=abc`).
/// An empty value counts as absent.
pub fn report_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == REPORT_ID_PARAM)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// A report after resolution, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReport {
    /// `None` for the built-in sample.
    pub id: Option<ReportId>,
    pub title: String,
    pub created_at: String,
    pub markdown: String,
}

impl ResolvedReport {
    fn sample() -> Self {
        Self {
            id: None,
            title: sample::SAMPLE_TITLE.to_string(),
            created_at: String::new(),
            markdown: sample::SAMPLE_MARKDOWN.to_string(),
        }
    }

    pub fn is_sample(&self) -> bool {
        self.id.is_none()
    }
}

/// Owns one view: its render target, the report index and the navigation
/// state of whatever document is currently displayed.
///
/// Construct it with [`ReportViewerBuilder`].
pub struct ReportViewer<T: RenderTarget> {
    target: T,
    index: LayeredIndex,
    content_provider: Option<Arc<dyn ResourceProvider>>,
    renderer: Option<Box<dyn DocumentRenderer>>,
    config: ViewerConfig,
    state: ViewState,
    navigator: Option<Navigator>,
    report: Option<ResolvedReport>,
}

impl<T: RenderTarget> ReportViewer<T> {
    /// Resolves `id` and displays the report, or the matching terminal error
    /// state. The target never stays in the loading state.
    pub fn load(&mut self, id: Option<&str>) -> Result<(), ViewerError> {
        self.state = ViewState::Loading;
        self.navigator = None;
        self.report = None;

        match self.show(id) {
            Ok(()) => {
                self.state = ViewState::Content;
                Ok(())
            }
            Err(e) => {
                if e.kind() == ErrorKind::Unexpected {
                    error!("Failed to display report: {}", e);
                } else {
                    warn!("{}", e);
                }
                self.target.set_error(&e.to_view(&self.config.listing_url));
                self.state = ViewState::Error(e.kind());
                Err(e)
            }
        }
    }

    /// [`load`](Self::load) with the id taken from a page query string.
    pub fn load_query(&mut self, query: &str) -> Result<(), ViewerError> {
        let id = report_id_from_query(query);
        self.load(id.as_deref())
    }

    fn show(&mut self, id: Option<&str>) -> Result<(), ViewerError> {
        let report = self.resolve(id)?;
        self.target.set_title(&report.title);

        let renderer = self
            .renderer
            .as_deref()
            .ok_or(ViewerError::RendererUnavailable)?;
        let document = renderer.render(&report.markdown)?;
        self.target.set_content(&document);

        let navigator = Navigator::new(&document, self.config.scroll_spy());
        navigator.publish(&mut self.target);
        info!(
            "Displayed '{}' ({} TOC entries)",
            report.title,
            navigator.toc().len()
        );

        self.navigator = Some(navigator);
        self.report = Some(report);
        Ok(())
    }

    /// Finds the record for `id` and produces its Markdown.
    pub fn resolve(&mut self, id: Option<&str>) -> Result<ResolvedReport, ViewerError> {
        let Some(id) = id.filter(|s| !s.is_empty()) else {
            debug!("No report id given; using the sample report");
            return Ok(ResolvedReport::sample());
        };

        let id = ReportId::new(id);
        let record = self
            .index
            .find(&id)?
            .ok_or_else(|| ViewerError::NotFound(id.clone()))?;

        let markdown = match record.inline_content() {
            Some(content) => content.to_string(),
            None => self.fetch_content(&record)?,
        };

        Ok(ResolvedReport {
            title: record.display_title().to_string(),
            id: Some(record.id),
            created_at: record.created_at,
            markdown,
        })
    }

    fn fetch_content(&self, record: &ReportRecord) -> Result<String, ViewerError> {
        if !record.is_usable() {
            return Err(ViewerError::ContentUnavailable {
                path: String::new(),
                reason: format!("report '{}' has neither content nor markdown_path", record.id),
            });
        }
        let path = record.markdown_path.as_deref().map(str::trim).unwrap_or_default();

        let provider = self
            .content_provider
            .as_ref()
            .ok_or_else(|| ViewerError::ContentUnavailable {
                path: path.to_string(),
                reason: "no resource provider configured".to_string(),
            })?;

        debug!("Fetching report content '{}' via {}", path, provider.name());
        match provider.load_text(path) {
            Ok(text) => Ok(text),
            Err(e) if e.is_unavailable() => Err(ViewerError::ContentUnavailable {
                path: path.to_string(),
                reason: e.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Every known record, higher-priority sources first.
    pub fn records(&mut self) -> Result<Vec<ReportRecord>, ViewerError> {
        Ok(self.index.all()?)
    }

    /// A TOC link was clicked. Returns `false` for unknown anchors or when no
    /// document is displayed.
    pub fn click(&mut self, anchor: &AnchorId) -> bool {
        match self.navigator.as_mut() {
            Some(nav) => nav.click(anchor, &mut self.target),
            None => false,
        }
    }

    /// The document was scrolled. Returns the anchor that became active.
    pub fn scroll(&mut self, scroll_top: f32, viewport_height: f32) -> Option<AnchorId> {
        self.navigator
            .as_mut()?
            .scroll(scroll_top, viewport_height, &mut self.target)
    }

    /// Supplies laid-out heading positions for the scroll spy.
    pub fn observe_headings(&mut self, spans: &[Span]) {
        if let Some(nav) = self.navigator.as_mut() {
            nav.observe_headings(spans);
        }
    }

    /// Supplies the TOC panel layout used for keeping the active entry visible.
    pub fn observe_toc_panel(&mut self, entry_spans: &[Span], height: f32, scroll_top: f32) {
        if let Some(nav) = self.navigator.as_mut() {
            nav.observe_panel(entry_spans, height, scroll_top);
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn report(&self) -> Option<&ResolvedReport> {
        self.report.as_ref()
    }

    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}
