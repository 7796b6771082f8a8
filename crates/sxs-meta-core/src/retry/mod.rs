//! Retry and backoff policy for records API requests.
//!
//! Classifies request failures (timeouts, throttling, connection failures)
//! and decides exponential backoff so the Zenodo client does not have to.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
