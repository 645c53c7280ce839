use crate::{ReportSource, SourceError, parse_records};
use log::warn;
use reportview_traits::ResourceProvider;
use reportview_types::ReportRecord;
use serde_json::Value;
use std::collections::HashMap;

/// A browser-style local key/value store: string keys, string values.
///
/// On disk it is a JSON object. Values are normally JSON-encoded strings (as
/// `localStorage` holds them); non-string values are re-encoded so a
/// hand-written store with inline arrays also works.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    entries: HashMap<String, String>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let object: HashMap<String, Value> =
            serde_json::from_str(json).map_err(|e| SourceError::Parse {
                source_name: "LocalStore",
                message: e.to_string(),
            })?;
        let entries = object
            .into_iter()
            .map(|(k, v)| match v {
                Value::String(s) => (k, s),
                other => (k, other.to_string()),
            })
            .collect();
        Ok(Self { entries })
    }

    /// Reads the store from `path`. A missing store is an empty store.
    pub fn from_provider(provider: &dyn ResourceProvider, path: &str) -> Result<Self, SourceError> {
        match provider.load_text(path) {
            Ok(text) => Self::from_json(&text),
            Err(e) if e.is_unavailable() => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Records persisted under one key of a [`LocalStore`].
///
/// Read-only. A missing key or an unparseable value yields no records; a
/// corrupted local cache must not stop the remaining sources from being
/// consulted.
#[derive(Debug, Clone)]
pub struct LocalStoreSource {
    store: LocalStore,
    key: String,
}

impl LocalStoreSource {
    pub fn new(store: LocalStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ReportSource for LocalStoreSource {
    fn load(&self) -> Result<Vec<ReportRecord>, SourceError> {
        let Some(raw) = self.store.get(&self.key) else {
            return Ok(Vec::new());
        };
        match parse_records(self.name(), raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Ignoring local store key '{}': {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    fn name(&self) -> &'static str {
        "LocalStoreSource"
    }
}
