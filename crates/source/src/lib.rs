//! Report index sources.
//!
//! A report identifier is resolved against several collections in a fixed
//! priority order. Each collection is a [`ReportSource`]; [`LayeredIndex`]
//! chains them and caches what it has loaded.
//!
//! ## Available Sources
//!
//! - [`LocalStoreSource`]: a JSON array stored under a key of a [`LocalStore`]
//! - [`PreloadedSource`]: records handed over in memory at startup
//! - [`RemoteIndexSource`]: a JSON index fetched through a `ResourceProvider`
//!
//! ## Example
//!
//! ```ignore
//! let mut index = LayeredIndex::new()
//!     .with_source(LocalStoreSource::new(store, "amz_reports"))
//!     .with_source(PreloadedSource::new(records))
//!     .with_source(RemoteIndexSource::new(provider, "data/reports.json"));
//!
//! let record = index.find(&ReportId::new("abc"))?;
//! ```

mod layered;
mod local;
mod preloaded;
mod remote;

pub use layered::LayeredIndex;
pub use local::{LocalStore, LocalStoreSource};
pub use preloaded::PreloadedSource;
pub use remote::RemoteIndexSource;

use reportview_traits::ResourceError;
use reportview_types::ReportRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to fetch report index: {0}")]
    Resource(#[from] ResourceError),

    #[error("Malformed report index in {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },
}

/// One collection of report records.
///
/// A source that is merely absent (no stored key, index file missing)
/// returns an empty list. Errors are reserved for failures the viewer must
/// surface.
pub trait ReportSource: Send {
    /// Load every record this source knows about, in source order.
    fn load(&self) -> Result<Vec<ReportRecord>, SourceError>;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl ReportSource for Box<dyn ReportSource> {
    fn load(&self) -> Result<Vec<ReportRecord>, SourceError> {
        (**self).load()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Parses a JSON array of records.
pub(crate) fn parse_records(source_name: &'static str, json: &str) -> Result<Vec<ReportRecord>, SourceError> {
    serde_json::from_str(json).map_err(|e| SourceError::Parse {
        source_name,
        message: e.to_string(),
    })
}
