//! Zenodo records API client.
//!
//! Uses the curl crate (libcurl) to page through `GET /api/records/` search
//! results, following `links.next`, with retries on transient failures.

mod page;
mod request;

pub use page::{PageLinks, SearchHits, SearchPage};
pub use request::RequestOptions;

use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::SxsMetaConfig;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::source::RecordSource;

/// Paginating search client for one records API host.
#[derive(Debug, Clone)]
pub struct ZenodoClient {
    base_url: String,
    page_size: u32,
    max_pages: u32,
    request: RequestOptions,
    retry: RetryPolicy,
}

impl ZenodoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&SxsMetaConfig {
            base_url: base_url.into(),
            ..SxsMetaConfig::default()
        })
    }

    pub fn from_config(cfg: &SxsMetaConfig) -> Self {
        Self {
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            page_size: cfg.page_size.max(1),
            max_pages: cfg.max_pages.max(1),
            request: RequestOptions {
                connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
                timeout: Duration::from_secs(cfg.request_timeout_secs),
                access_token: cfg.access_token.clone().filter(|t| !t.trim().is_empty()),
            },
            retry: cfg.retry_policy(),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// URL of the first results page for `query`.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let endpoint = format!("{}/api/records/", self.base_url);
        Url::parse_with_params(
            &endpoint,
            &[
                ("q", query.to_string()),
                ("size", self.page_size.to_string()),
                ("page", "1".to_string()),
            ],
        )
        .with_context(|| format!("invalid records endpoint: {}", endpoint))
    }

    /// All records matching `query`, in server order, across pages.
    pub fn search_records(&self, query: &str) -> Result<Vec<Value>> {
        let mut next = Some(self.search_url(query)?.to_string());
        let mut records = Vec::new();
        let mut pages = 0u32;

        while let Some(url) = next.take() {
            if pages == self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    fetched = records.len(),
                    "page limit reached, search results truncated"
                );
                break;
            }
            tracing::debug!(%url, "fetching records page");
            let page = run_with_retry(&self.retry, || request::get_page(&url, &self.request))
                .with_context(|| format!("records search failed: {}", url))?;
            pages += 1;

            if pages == 1 {
                tracing::info!(total = ?page.total(), query, "records search");
            }
            if page.hits.hits.is_empty() {
                break;
            }
            records.extend(page.hits.hits);
            next = page.links.next;
        }

        tracing::info!(pages, records = records.len(), "records search complete");
        Ok(records)
    }
}

impl RecordSource for ZenodoClient {
    fn search(&self, query: &str) -> Result<Vec<Value>> {
        self.search_records(query)
    }
}
