//! Filesystem-based resource provider.
//!
//! Serves a report site laid out on disk (`data/reports.json`,
//! `reports/*.md`, ...). Resolved paths must stay inside the base directory.

use reportview_traits::{ResourceError, ResourceProvider, SharedResourceData, split_query};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// A resource provider that loads resources relative to a site directory.
///
/// Query strings are ignored, so cache-busted index URLs resolve to the
/// plain file. Paths that would leave the base directory are reported as
/// `NotFound`.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // May fail if the directory doesn't exist yet
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Returns `None` if the path would escape the base directory.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        let (path, _) = split_query(path);
        // Index paths are site-relative; a leading `/` means the site root.
        let path = path.trim_start_matches("./").trim_start_matches('/');
        if path.is_empty() || Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // File doesn't exist (yet): reject any parent-dir component outright
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_path_safe(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside site directory)", path)))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
