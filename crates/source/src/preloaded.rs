use crate::{ReportSource, SourceError, parse_records};
use reportview_types::ReportRecord;

/// Records supplied in memory before the viewer starts, e.g. embedded in the
/// page or passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct PreloadedSource {
    records: Vec<ReportRecord>,
}

impl PreloadedSource {
    pub fn new(records: Vec<ReportRecord>) -> Self {
        Self { records }
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(Self::new(parse_records("PreloadedSource", json)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ReportRecord>> for PreloadedSource {
    fn from(records: Vec<ReportRecord>) -> Self {
        Self::new(records)
    }
}

impl ReportSource for PreloadedSource {
    fn load(&self) -> Result<Vec<ReportRecord>, SourceError> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &'static str {
        "PreloadedSource"
    }
}
