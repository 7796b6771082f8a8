//! Single-page records API stand-in for running the `sxs-meta` binary end to end.

use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serves `hits` as the only search page, or `status` with an empty body when set.
/// Returns the base URL (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(hits: Vec<Value>, status: Option<u16>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = match status {
        Some(_) => "{}".to_string(),
        None => json!({ "hits": { "hits": hits, "total": hits.len() }, "links": {} }).to_string(),
    };
    let status = status.unwrap_or(200);
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
            let mut buf = [0u8; 8192];
            if !matches!(stream.read(&mut buf), Ok(n) if n > 0) {
                continue;
            }
            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://127.0.0.1:{}", port)
}
