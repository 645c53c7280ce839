//! Viewer configuration.

use crate::error::ViewerError;
use crate::scroll::{DEFAULT_BOTTOM_RATIO, DEFAULT_TOP_INSET, ScrollSpyConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_INDEX_PATH: &str = "data/reports.json";
pub const DEFAULT_LOCAL_STORE_KEY: &str = "amz_reports";
pub const DEFAULT_LISTING_URL: &str = "reports.html";
pub const DEFAULT_CACHE_BUST_PARAM: &str = "t";
pub const DEFAULT_SITE_NAME: &str = "Product Analysis Report";

/// Settings for a [`ReportViewer`](crate::ReportViewer). Every field has a
/// default, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Location of the published report index, relative to the site.
    pub index_path: String,
    /// Local store key holding the reader's own reports.
    pub local_store_key: String,
    /// Where the "back to reports" link points.
    pub listing_url: String,
    /// Query parameter appended to index fetches; empty disables it.
    pub cache_bust_param: String,
    /// Appended to the page title.
    pub site_name: String,
    pub top_inset_px: f32,
    pub bottom_band_ratio: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            index_path: DEFAULT_INDEX_PATH.to_string(),
            local_store_key: DEFAULT_LOCAL_STORE_KEY.to_string(),
            listing_url: DEFAULT_LISTING_URL.to_string(),
            cache_bust_param: DEFAULT_CACHE_BUST_PARAM.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            top_inset_px: DEFAULT_TOP_INSET,
            bottom_band_ratio: DEFAULT_BOTTOM_RATIO,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ViewerError::Config(format!("Failed to read config from '{}': {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.index_path.trim().is_empty() {
            return Err(ViewerError::Config("index_path must not be empty".to_string()));
        }
        if !(0.0..1.0).contains(&self.bottom_band_ratio) {
            return Err(ViewerError::Config(format!(
                "bottom_band_ratio must be in [0, 1), got {}",
                self.bottom_band_ratio
            )));
        }
        if self.top_inset_px < 0.0 {
            return Err(ViewerError::Config("top_inset_px must not be negative".to_string()));
        }
        Ok(())
    }

    pub fn cache_bust(&self) -> Option<String> {
        let param = self.cache_bust_param.trim();
        (!param.is_empty()).then(|| param.to_string())
    }

    pub fn scroll_spy(&self) -> ScrollSpyConfig {
        ScrollSpyConfig {
            top_inset: self.top_inset_px,
            bottom_ratio: self.bottom_band_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.index_path, "data/reports.json");
        assert_eq!(config.cache_bust(), Some("t".to_string()));
        assert_eq!(config.scroll_spy(), ScrollSpyConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(r#"{"listing_url": "/my-reports"}"#).unwrap();
        assert_eq!(config.listing_url, "/my-reports");
        assert_eq!(config.local_store_key, DEFAULT_LOCAL_STORE_KEY);
    }

    #[test]
    fn test_empty_cache_bust_disables_it() {
        let config = ViewerConfig::from_json(r#"{"cache_bust_param": ""}"#).unwrap();
        assert_eq!(config.cache_bust(), None);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let result = ViewerConfig::from_json(r#"{"bottom_band_ratio": 1.5}"#);
        assert!(matches!(result, Err(ViewerError::Config(_))));
    }

    #[test]
    fn test_unknown_file_is_config_error() {
        let result = ViewerConfig::from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ViewerError::Config(_))));
    }
}
