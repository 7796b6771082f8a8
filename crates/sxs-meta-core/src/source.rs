//! Record source interface for answering catalog search queries.
//!
//! The export pipeline only depends on this trait and does not know about
//! Zenodo or any other specific records API.

use serde_json::Value;

/// Fixed search predicate for the open SXS community records.
pub const SXS_OPEN_QUERY: &str = "communities:sxs AND access_right:open";

/// Anything that can answer a search query with a finite list of records.
pub trait RecordSource {
    fn search(&self, query: &str) -> anyhow::Result<Vec<Value>>;
}

/// Source backed by records already in memory. Ignores the query.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub records: Vec<Value>,
}

impl StaticSource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn search(&self, _query: &str) -> anyhow::Result<Vec<Value>> {
        Ok(self.records.clone())
    }
}
