use crate::{ReportSource, SourceError, parse_records};
use log::{debug, warn};
use reportview_traits::ResourceProvider;
use reportview_types::ReportRecord;
use std::fmt;
use std::sync::Arc;

const DEFAULT_CACHE_BUST_PARAM: &str = "t";

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// The published report index: a JSON array of records at a well-known path.
///
/// Every fetch appends a timestamp query parameter so intermediate caches
/// never serve a stale index. A missing index or an HTTP error status counts
/// as "no records"; transport failures and malformed JSON are errors.
pub struct RemoteIndexSource {
    provider: Arc<dyn ResourceProvider>,
    index_path: String,
    cache_bust_param: Option<String>,
    clock: fn() -> i64,
}

impl RemoteIndexSource {
    pub fn new(provider: Arc<dyn ResourceProvider>, index_path: impl Into<String>) -> Self {
        Self {
            provider,
            index_path: index_path.into(),
            cache_bust_param: Some(DEFAULT_CACHE_BUST_PARAM.to_string()),
            clock: now_millis,
        }
    }

    /// Sets the cache-busting parameter name; `None` disables it.
    pub fn with_cache_bust_param(mut self, param: Option<String>) -> Self {
        self.cache_bust_param = param;
        self
    }

    /// Replaces the timestamp source used for cache busting.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// The path actually requested, including the cache-busting parameter.
    pub fn request_path(&self) -> String {
        match &self.cache_bust_param {
            Some(param) => {
                let sep = if self.index_path.contains('?') { '&' } else { '?' };
                format!("{}{}{}={}", self.index_path, sep, param, (self.clock)())
            }
            None => self.index_path.clone(),
        }
    }
}

impl fmt::Debug for RemoteIndexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteIndexSource")
            .field("provider", &self.provider.name())
            .field("index_path", &self.index_path)
            .field("cache_bust_param", &self.cache_bust_param)
            .finish()
    }
}

impl ReportSource for RemoteIndexSource {
    fn load(&self) -> Result<Vec<ReportRecord>, SourceError> {
        let path = self.request_path();
        debug!("Fetching report index '{}' via {}", path, self.provider.name());
        match self.provider.load_text(&path) {
            Ok(text) => parse_records(self.name(), &text),
            Err(e) if e.is_unavailable() => {
                warn!("Report index unavailable: {}", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "RemoteIndexSource"
    }
}
