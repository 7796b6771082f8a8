//! Minimal HTTP/1.1 server that answers paginated `/api/records/` searches for integration tests.
//!
//! Page N (from the `page` query parameter) is `pages[N-1]`; every page but the
//! last carries a `links.next` pointing at page N+1.

use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordsServerOptions {
    /// Answer this many requests with 503 before serving normally.
    pub fail_first: usize,
    /// Answer every request with this status and an empty JSON object.
    pub always_status: Option<u16>,
}

/// Handle to a running server. Runs until the process exits.
pub struct RecordsServer {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl RecordsServer {
    /// Requests received so far, including failed ones.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

pub fn start(pages: Vec<Vec<Value>>) -> RecordsServer {
    start_with_options(pages, RecordsServerOptions::default())
}

pub fn start_with_options(pages: Vec<Vec<Value>>, opts: RecordsServerOptions) -> RecordsServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base_url = format!("http://127.0.0.1:{}", port);
    let requests = Arc::new(AtomicUsize::new(0));
    let pages = Arc::new(pages);
    let counter = Arc::clone(&requests);
    let base = base_url.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            handle(stream, &pages, &base, n, opts);
        }
    });
    RecordsServer { base_url, requests }
}

fn handle(
    mut stream: std::net::TcpStream,
    pages: &[Vec<Value>],
    base: &str,
    request_index: usize,
    opts: RecordsServerOptions,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let target = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");

    if let Some(status) = opts.always_status {
        respond(&mut stream, status, "{}");
        return;
    }
    if request_index < opts.fail_first {
        respond(&mut stream, 503, "{}");
        return;
    }
    if !target.starts_with("/api/records/") {
        respond(&mut stream, 404, "{}");
        return;
    }

    let page = page_param(target).unwrap_or(1).max(1);
    let hits = pages.get(page - 1).cloned().unwrap_or_default();
    let mut links = json!({ "self": format!("{}/api/records/?page={}", base, page) });
    if page < pages.len() {
        links["next"] = json!(format!(
            "{}/api/records/?q=communities%3Asxs&size=2&page={}",
            base,
            page + 1
        ));
    }
    let total: usize = pages.iter().map(Vec::len).sum();
    let body = json!({ "hits": { "hits": hits, "total": total }, "links": links });
    respond(&mut stream, 200, &body.to_string());
}

fn page_param(target: &str) -> Option<usize> {
    let (_, query) = target.split_once('?')?;
    query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == "page")
        .and_then(|(_, v)| v.parse().ok())
}

fn respond(stream: &mut std::net::TcpStream, status: u16, body: &str) {
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        503 => "Service Unavailable",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
