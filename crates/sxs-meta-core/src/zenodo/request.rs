//! Blocking JSON GET against the records API.

use std::time::Duration;

use crate::retry::FetchError;

use super::page::SearchPage;

/// Per-request transport options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub access_token: Option<String>,
}

/// Performs one GET and decodes the body as a search page.
///
/// Follows redirects. Runs in the current thread.
pub fn get_page(url: &str, opts: &RequestOptions) -> Result<SearchPage, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(concat!("sxs-meta/", env!("CARGO_PKG_VERSION")))?;

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    if let Some(token) = &opts.access_token {
        list.append(&format!("Authorization: Bearer {}", token.trim()))?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }

    serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
