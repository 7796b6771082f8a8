//! Classify HTTP status and curl errors into retry policy error kinds.

use super::error::FetchError;
use super::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a request error into an ErrorKind. Decode failures are never retried.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Curl(ce) => classify_curl_error(ce),
        FetchError::Http { status, .. } => classify_http_status(*status),
        FetchError::Decode { .. } => ErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_429_and_503_throttled() {
        assert_eq!(classify_http_status(429), ErrorKind::Throttled);
        assert_eq!(classify_http_status(503), ErrorKind::Throttled);
    }

    #[test]
    fn http_5xx_retryable() {
        assert!(matches!(classify_http_status(500), ErrorKind::Http5xx(500)));
        assert!(matches!(classify_http_status(504), ErrorKind::Http5xx(504)));
    }

    #[test]
    fn http_4xx_other() {
        assert_eq!(classify_http_status(400), ErrorKind::Other);
        assert_eq!(classify_http_status(404), ErrorKind::Other);
    }

    #[test]
    fn decode_error_not_retried() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = FetchError::Decode {
            url: "https://zenodo.org/api/records/".to_string(),
            source,
        };
        assert_eq!(classify(&e), ErrorKind::Other);
        assert_eq!(
            e.to_string(),
            "undecodable response from https://zenodo.org/api/records/"
        );
    }

    #[test]
    fn http_error_uses_status() {
        let e = FetchError::Http {
            status: 502,
            url: "https://zenodo.org/api/records/".to_string(),
        };
        assert_eq!(classify(&e), ErrorKind::Http5xx(502));
    }
}
