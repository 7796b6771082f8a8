//! BBH catalog: records keyed by simulation identifier, in query order.

mod sxs_id;

pub use sxs_id::{is_bbh_id, sxs_id_from_title, BBH_TAG};

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Record at `index` (0-based, query order) has no string `title`.
    #[error("record {index} has no string `title` field")]
    MissingTitle { index: usize },
}

/// Retained simulation records keyed by identifier.
///
/// Keys keep first-insertion order; a repeated identifier replaces the
/// earlier record in place.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Map<String, Value>,
}

impl Catalog {
    /// Build the catalog from search results, keeping only BBH identifiers.
    pub fn build<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut catalog = Map::new();
        for (index, record) in records.into_iter().enumerate() {
            let title = record
                .get("title")
                .and_then(Value::as_str)
                .ok_or(CatalogError::MissingTitle { index })?;
            let id = sxs_id_from_title(title);
            if !is_bbh_id(id) {
                tracing::trace!(title, "skipping non-BBH record");
                continue;
            }
            let id = id.to_string();
            if catalog.insert(id.clone(), record).is_some() {
                tracing::debug!(%id, "duplicate identifier, keeping last record");
            }
        }
        Ok(Self { records: catalog })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.records.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn as_json_map(&self) -> &Map<String, Value> {
        &self.records
    }
}
