//! ResourceProvider trait for abstracting document and index loading.
//!
//! The viewer never touches the filesystem or the network directly; every
//! fetch goes through a provider so the resolution algorithm can run against
//! in-memory fixtures.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Why fetching an index or a report document failed.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ResourceError {
    /// True for "the server answered, but not with the resource" failures
    /// (missing file, HTTP error status). Transport failures return false.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ResourceError::NotFound(_) | ResourceError::LoadFailed { .. })
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Fetched bytes, shared without copying.
pub type SharedResourceData = Arc<Vec<u8>>;

/// Splits `reports.json?t=123` into `("reports.json", Some("t=123"))`.
///
/// Providers without a notion of query strings (memory, filesystem) look
/// resources up by the path part only.
pub fn split_query(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    }
}

/// Fetches report indexes and documents by site-relative path.
///
/// # Implementations
///
/// - `FilesystemResourceProvider`: loads from a local directory
/// - `HttpResourceProvider`: loads relative to a base URL
/// - `InMemoryResourceProvider`: pre-populated memory (always available)
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its path/URI. The path may carry a query string.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Load a resource and decode it as UTF-8 text.
    fn load_text(&self, path: &str) -> Result<String, ResourceError> {
        let data = self.load(path)?;
        String::from_utf8(data.to_vec())
            .map_err(|e| ResourceError::InvalidFormat(format!("{}: {}", path, e)))
    }

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources must be added before use. Every `load` call is counted, which
/// lets tests assert that a code path performed no fetch at all.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
    loads: AtomicUsize,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<(), ResourceError> {
        let path_string = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path_string.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path_string, Arc::new(data.into()));
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add) for fixtures.
    pub fn with(self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<Self, ResourceError> {
        self.add(path, data)?;
        Ok(self)
    }

    /// Remove a resource from the store.
    ///
    /// Returns `None` if the lock is poisoned or the resource doesn't exist.
    pub fn remove(&self, path: &str) -> Option<SharedResourceData> {
        self.resources.write().ok()?.remove(path)
    }

    /// Number of stored paths (0 if the lock is poisoned).
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `load` calls served so far, successful or not.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        let (key, _) = split_query(path);
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(key)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(key.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
