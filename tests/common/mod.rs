#![allow(dead_code)]

pub mod fixtures;

use reportview::{
    AnchorId, ErrorView, HtmlPage, InMemoryResourceProvider, LocalStore, RenderTarget,
    RenderedDocument, ReportRecord, ReportViewer, ReportViewerBuilder, ResourceError,
    ResourceProvider, ViewerConfig,
};
use std::sync::{Arc, Mutex};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One call made on a [`RecordingTarget`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetCall {
    Title(String),
    Content(RenderedDocument),
    Error(ErrorView),
    Active(Option<AnchorId>),
    ScrollTo(AnchorId),
    ScrollToc(f32),
}

/// A render target that remembers every call it received.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub calls: Vec<TargetCall>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TargetCall::Title(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn content(&self) -> Option<&RenderedDocument> {
        self.calls.iter().rev().find_map(|c| match c {
            TargetCall::Content(d) => Some(d),
            _ => None,
        })
    }

    pub fn error(&self) -> Option<&ErrorView> {
        self.calls.iter().rev().find_map(|c| match c {
            TargetCall::Error(e) => Some(e),
            _ => None,
        })
    }

    /// The most recent active-entry announcement.
    pub fn active(&self) -> Option<Option<&AnchorId>> {
        self.calls.iter().rev().find_map(|c| match c {
            TargetCall::Active(a) => Some(a.as_ref()),
            _ => None,
        })
    }

    pub fn scrolled_to(&self) -> Vec<&AnchorId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TargetCall::ScrollTo(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    pub fn toc_offsets(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                TargetCall::ScrollToc(o) => Some(*o),
                _ => None,
            })
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn set_content(&mut self, document: &RenderedDocument) {
        self.calls.push(TargetCall::Content(document.clone()));
    }

    fn set_error(&mut self, error: &ErrorView) {
        self.calls.push(TargetCall::Error(error.clone()));
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(TargetCall::Title(title.to_string()));
    }

    fn set_active_entry(&mut self, entry: Option<&AnchorId>) {
        self.calls.push(TargetCall::Active(entry.cloned()));
    }

    fn scroll_to(&mut self, anchor: &AnchorId) {
        self.calls.push(TargetCall::ScrollTo(anchor.clone()));
    }

    fn scroll_toc_to(&mut self, offset: f32) {
        self.calls.push(TargetCall::ScrollToc(offset));
    }
}

/// Wraps another provider and records every requested path.
#[derive(Debug)]
pub struct RecordingProvider {
    inner: InMemoryResourceProvider,
    requests: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(inner: InMemoryResourceProvider) -> Self {
        Self {
            inner,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl ResourceProvider for RecordingProvider {
    fn load(&self, path: &str) -> Result<Arc<Vec<u8>>, ResourceError> {
        self.requests.lock().unwrap().push(path.to_string());
        self.inner.load(path)
    }

    fn name(&self) -> &'static str {
        "RecordingProvider"
    }
}

/// A provider whose every fetch fails at the transport level.
#[derive(Debug, Default)]
pub struct FailingProvider;

impl ResourceProvider for FailingProvider {
    fn load(&self, path: &str) -> Result<Arc<Vec<u8>>, ResourceError> {
        Err(ResourceError::Io(format!("connection reset while fetching {}", path)))
    }

    fn name(&self) -> &'static str {
        "FailingProvider"
    }
}

/// A local store holding `records` under the default key.
pub fn local_store_with(records: &[ReportRecord]) -> LocalStore {
    let mut store = LocalStore::new();
    store.set(
        ViewerConfig::default().local_store_key,
        serde_json::to_string(records).unwrap(),
    );
    store
}

/// A viewer over an empty local store and the given site.
pub fn viewer_for_site(
    provider: Arc<dyn ResourceProvider>,
) -> ReportViewer<RecordingTarget> {
    ReportViewerBuilder::new()
        .with_provider(provider)
        .build(RecordingTarget::new())
        .unwrap()
}

pub fn html_viewer(builder: ReportViewerBuilder) -> ReportViewer<HtmlPage> {
    builder.build(HtmlPage::new("Product Analysis Report")).unwrap()
}
