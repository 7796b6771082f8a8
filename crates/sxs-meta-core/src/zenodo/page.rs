//! Minimal structures of a records API search response.

use serde::Deserialize;
use serde_json::Value;

/// One page of `GET /api/records/` results.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub hits: SearchHits,
    #[serde(default)]
    pub links: PageLinks,
}

#[derive(Debug, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<Value>,
    /// Plain number on the legacy API, `{"value": n}` on newer deployments.
    #[serde(default)]
    pub total: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

impl SearchPage {
    pub fn total(&self) -> Option<u64> {
        match self.hits.total.as_ref()? {
            Value::Number(n) => n.as_u64(),
            Value::Object(o) => o.get("value").and_then(Value::as_u64),
            _ => None,
        }
    }
}
