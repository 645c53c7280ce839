//! HTTP resource provider backed by a blocking `reqwest` client.

use log::debug;
use reportview_traits::{ResourceError, ResourceProvider, SharedResourceData};
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads resources relative to a base URL.
///
/// Status mapping: 404 becomes `NotFound`, any other non-success status
/// becomes `LoadFailed`, and transport failures become `Io`.
#[derive(Debug)]
pub struct HttpResourceProvider {
    base: Url,
    client: reqwest::blocking::Client,
}

impl HttpResourceProvider {
    pub fn new(base: &str) -> Result<Self, ResourceError> {
        Self::with_timeout(base, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base: &str, timeout: Duration) -> Result<Self, ResourceError> {
        let base = parse_base(base)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResourceError::Io(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { base, client })
    }

    /// Uses a preconfigured client (proxy, TLS or header settings).
    pub fn with_client(base: &str, client: reqwest::blocking::Client) -> Result<Self, ResourceError> {
        Ok(Self {
            base: parse_base(base)?,
            client,
        })
    }

    /// The normalized base URL, always ending in `/`.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolves `path` against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, path: &str) -> Result<Url, ResourceError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ResourceError::InvalidFormat(format!("{}: {}", path, e)))
    }
}

/// Directory-style base: `https://host/site` is treated as `https://host/site/`.
fn parse_base(base: &str) -> Result<Url, ResourceError> {
    let normalized = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    Url::parse(&normalized).map_err(|e| ResourceError::InvalidFormat(format!("{}: {}", base, e)))
}

impl ResourceProvider for HttpResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let url = self.resolve(path)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ResourceError::Io(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ResourceError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(ResourceError::LoadFailed {
                path: path.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .bytes()
            .map(|b| Arc::new(b.to_vec()))
            .map_err(|e| ResourceError::Io(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "HttpResourceProvider"
    }
}
