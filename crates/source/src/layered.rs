use crate::{ReportSource, SourceError};
use log::debug;
use reportview_types::{ReportId, ReportRecord};

struct Layer {
    source: Box<dyn ReportSource>,
    loaded: Option<Vec<ReportRecord>>,
}

impl Layer {
    fn records(&mut self) -> Result<&[ReportRecord], SourceError> {
        if self.loaded.is_none() {
            let records = self.source.load()?;
            debug!("{} loaded {} record(s)", self.source.name(), records.len());
            self.loaded = Some(records);
        }
        Ok(self.loaded.as_deref().unwrap_or_default())
    }
}

/// Sources consulted in priority order.
///
/// Each source is loaded at most once, and only when every earlier source
/// failed to produce a match. Lookup is exact `id` equality; the first
/// match wins.
#[derive(Default)]
pub struct LayeredIndex {
    layers: Vec<Layer>,
}

impl LayeredIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source with lower priority than all existing ones.
    pub fn with_source(mut self, source: impl ReportSource + 'static) -> Self {
        self.push(Box::new(source));
        self
    }

    pub fn push(&mut self, source: Box<dyn ReportSource>) {
        self.layers.push(Layer {
            source,
            loaded: None,
        });
    }

    pub fn source_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|l| l.source.name()).collect()
    }

    pub fn find(&mut self, id: &ReportId) -> Result<Option<ReportRecord>, SourceError> {
        for layer in &mut self.layers {
            let name = layer.source.name();
            if let Some(record) = layer.records()?.iter().find(|r| &r.id == id) {
                debug!("Report '{}' found in {}", id, name);
                return Ok(Some(record.clone()));
            }
        }
        Ok(None)
    }

    /// All records from all sources, earlier sources first. Records whose id
    /// already appeared in a higher-priority source are skipped.
    pub fn all(&mut self) -> Result<Vec<ReportRecord>, SourceError> {
        let mut merged: Vec<ReportRecord> = Vec::new();
        for layer in &mut self.layers {
            for record in layer.records()? {
                if !merged.iter().any(|r| r.id == record.id) {
                    merged.push(record.clone());
                }
            }
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PreloadedSource;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        records: Vec<ReportRecord>,
        loads: Arc<AtomicUsize>,
    }

    impl ReportSource for CountingSource {
        fn load(&self) -> Result<Vec<ReportRecord>, SourceError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }

        fn name(&self) -> &'static str {
            "CountingSource"
        }
    }

    fn counting(records: Vec<ReportRecord>) -> (CountingSource, Arc<AtomicUsize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        (
            CountingSource {
                records,
                loads: loads.clone(),
            },
            loads,
        )
    }

    #[test]
    fn test_first_match_wins() {
        let mut index = LayeredIndex::new()
            .with_source(PreloadedSource::new(vec![ReportRecord::new("abc", "Local")]))
            .with_source(PreloadedSource::new(vec![ReportRecord::new("abc", "Remote")]));

        let record = index.find(&ReportId::new("abc")).unwrap().unwrap();
        assert_eq!(record.title, "Local");
    }

    #[test]
    fn test_later_sources_not_loaded_after_match() {
        let (remote, remote_loads) = counting(vec![ReportRecord::new("abc", "Remote")]);
        let mut index = LayeredIndex::new()
            .with_source(PreloadedSource::new(vec![ReportRecord::new("abc", "Local")]))
            .with_source(remote);

        index.find(&ReportId::new("abc")).unwrap();
        assert_eq!(remote_loads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_each_source_loaded_once() {
        let (remote, remote_loads) = counting(vec![ReportRecord::new("abc", "Remote")]);
        let mut index = LayeredIndex::new().with_source(remote);

        index.find(&ReportId::new("abc")).unwrap();
        index.find(&ReportId::new("zzz")).unwrap();
        index.all().unwrap();
        assert_eq!(remote_loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_match() {
        let mut index = LayeredIndex::new().with_source(PreloadedSource::default());
        assert!(index.find(&ReportId::new("does-not-exist")).unwrap().is_none());
    }

    #[test]
    fn test_all_deduplicates_by_priority() {
        let mut index = LayeredIndex::new()
            .with_source(PreloadedSource::new(vec![ReportRecord::new("a", "Local A")]))
            .with_source(PreloadedSource::new(vec![
                ReportRecord::new("b", "Remote B"),
                ReportRecord::new("a", "Remote A"),
            ]));

        let all = index.all().unwrap();
        let titles: Vec<_> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Local A", "Remote B"]);
    }
}
