//! Resource providers for the report viewer.
//!
//! This crate provides platform-specific implementations of the
//! `ResourceProvider` trait from reportview-traits.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Loads a report site from a local directory
//! - [`HttpResourceProvider`]: Loads a report site relative to a base URL
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from reportview-traits:
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage

mod filesystem;
mod http;

pub use filesystem::FilesystemResourceProvider;
pub use http::HttpResourceProvider;

pub use reportview_traits::InMemoryResourceProvider;

use reportview_traits::{ResourceError, ResourceProvider};

/// Picks a provider for a site location: `http(s)://` bases are fetched over
/// the network, anything else is treated as a directory.
pub fn provider_for(base: &str) -> Result<Box<dyn ResourceProvider>, ResourceError> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(Box::new(HttpResourceProvider::new(base)?))
    } else {
        Ok(Box::new(FilesystemResourceProvider::new(base)))
    }
}
