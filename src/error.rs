// src/error.rs
//! Error type for report resolution and rendering.

use reportview_source::SourceError;
use reportview_traits::{ErrorKind, ErrorView, Link, ResourceError};
use reportview_types::ReportId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Report not found: '{0}'")]
    NotFound(ReportId),

    #[error("Unable to load report content from '{path}': {reason}")]
    ContentUnavailable { path: String, reason: String },

    #[error("Document renderer is not available")]
    RendererUnavailable,

    #[error("Report index error: {0}")]
    Source(#[from] SourceError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ViewerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ViewerError::NotFound(_) => ErrorKind::NotFound,
            ViewerError::ContentUnavailable { .. } => ErrorKind::ContentUnavailable,
            ViewerError::RendererUnavailable => ErrorKind::RendererUnavailable,
            _ => ErrorKind::Unexpected,
        }
    }

    /// Text shown to the reader. Internal details stay in the log.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::NotFound => {
                "This report could not be found. It may have been removed or the link is incorrect."
                    .to_string()
            }
            ErrorKind::ContentUnavailable => {
                "Unable to load the report content. Please try again later.".to_string()
            }
            ErrorKind::RendererUnavailable => {
                "The report viewer failed to initialise. Please refresh the page.".to_string()
            }
            ErrorKind::Unexpected => "Something went wrong while loading this report.".to_string(),
        }
    }

    /// The terminal view for this error. Only "not found" offers a way back to
    /// the report listing.
    pub fn to_view(&self, listing_url: &str) -> ErrorView {
        let recovery = match self.kind() {
            ErrorKind::NotFound => Some(Link {
                href: listing_url.to_string(),
                label: "Back to reports".to_string(),
            }),
            _ => None,
        };
        ErrorView {
            kind: self.kind(),
            message: self.user_message(),
            recovery,
        }
    }
}
