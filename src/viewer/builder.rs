// src/viewer/builder.rs
use super::ReportViewer;
use crate::config::ViewerConfig;
use crate::document::{DocumentRenderer, MarkdownRenderer};
use crate::error::ViewerError;
use log::debug;
use reportview_source::{
    LayeredIndex, LocalStore, LocalStoreSource, PreloadedSource, RemoteIndexSource,
};
use reportview_traits::{RenderTarget, ResourceProvider, ViewState};
use reportview_types::ReportRecord;
use std::sync::Arc;

/// A builder for creating a `ReportViewer`.
///
/// Sources are layered in a fixed order regardless of the order the `with_*`
/// methods are called: local store, preloaded records, remote index.
pub struct ReportViewerBuilder {
    config: ViewerConfig,
    local_store: Option<LocalStore>,
    preloaded: Option<PreloadedSource>,
    provider: Option<Arc<dyn ResourceProvider>>,
    renderer: Option<Box<dyn DocumentRenderer>>,
    clock: Option<fn() -> i64>,
}

impl Default for ReportViewerBuilder {
    fn default() -> Self {
        Self {
            config: ViewerConfig::default(),
            local_store: None,
            preloaded: None,
            provider: None,
            renderer: Some(Box::new(MarkdownRenderer::new())),
            clock: None,
        }
    }
}

impl ReportViewerBuilder {
    /// Creates a builder with default settings and the Markdown renderer installed.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ViewerConfig) -> Self {
        self.config = config;
        self
    }

    /// The reader's local store; records are read from `config.local_store_key`.
    pub fn with_local_store(mut self, store: LocalStore) -> Self {
        self.local_store = Some(store);
        self
    }

    /// Records made available in memory before the viewer starts.
    pub fn with_preloaded(mut self, records: Vec<ReportRecord>) -> Self {
        self.preloaded = Some(PreloadedSource::new(records));
        self
    }

    /// The site the remote index and report documents are fetched from.
    pub fn with_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_renderer(mut self, renderer: impl DocumentRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Builds a viewer with no rendering engine; every load that gets as far
    /// as rendering fails with `RendererUnavailable`.
    pub fn without_renderer(mut self) -> Self {
        self.renderer = None;
        self
    }

    /// Replaces the timestamp used for cache-busting index fetches.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Consumes the builder and creates the `ReportViewer`, which starts in
    /// the loading state.
    pub fn build<T: RenderTarget>(self, target: T) -> Result<ReportViewer<T>, ViewerError> {
        self.config.validate()?;

        let mut index = LayeredIndex::new().with_source(LocalStoreSource::new(
            self.local_store.unwrap_or_default(),
            self.config.local_store_key.clone(),
        ));
        if let Some(preloaded) = self.preloaded {
            index = index.with_source(preloaded);
        }
        if let Some(provider) = &self.provider {
            let mut remote = RemoteIndexSource::new(provider.clone(), self.config.index_path.clone())
                .with_cache_bust_param(self.config.cache_bust());
            if let Some(clock) = self.clock {
                remote = remote.with_clock(clock);
            }
            index = index.with_source(remote);
        }
        debug!("Report index layers: {:?}", index.source_names());

        Ok(ReportViewer {
            target,
            index,
            content_provider: self.provider,
            renderer: self.renderer,
            config: self.config,
            state: ViewState::Loading,
            navigator: None,
            report: None,
        })
    }
}
