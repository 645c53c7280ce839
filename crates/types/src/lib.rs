pub mod document;
pub mod geometry;
pub mod ids;
pub mod record;

pub use document::{RenderedDocument, TocEntry};
pub use geometry::{Band, Span};
pub use ids::{AnchorId, ReportId};
pub use record::ReportRecord;
