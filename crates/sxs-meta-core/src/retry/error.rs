//! Request error type for retry classification.

use thiserror::Error;

/// Error returned by a single records API request.
/// Kept typed so it can be classified for retries before converting to anyhow.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http { status: u32, url: String },
    /// Body was not the JSON shape of a search page.
    #[error("undecodable response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
