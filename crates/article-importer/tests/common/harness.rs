//! Test doubles for the transport boundary.
//!
//! - `ScriptedTransport` answers from a queue of results and records every
//!   request; it can hold calls open until the test releases them.
//! - `MockEndpoint` is a one-shot HTTP server on a local port for exercising
//!   `HttpTransport` end to end.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use article_importer::config::ApiConfig;
use article_importer::{
    ArticleTransport, CategoryTree, ImportRequest, ImportSession, SizeLimits, TransportError,
};

/// Transport returning queued results in order.
pub struct ScriptedTransport {
    results: Mutex<VecDeque<Result<u64, TransportError>>>,
    requests: Mutex<Vec<ImportRequest>>,
    calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl ScriptedTransport {
    /// Transport that answers immediately.
    pub fn new(results: Vec<Result<u64, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(vec![]),
            calls: AtomicUsize::new(0),
            gate: None,
        })
    }

    /// Transport whose calls block until `release` is called.
    pub fn gated(results: Vec<Result<u64, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(vec![]),
            calls: AtomicUsize::new(0),
            gate: Some(Semaphore::new(0)),
        })
    }

    /// Lets one blocked call proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ImportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleTransport for ScriptedTransport {
    async fn import_articles(&self, request: &ImportRequest) -> Result<u64, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.expect("gate closed");
            permit.forget();
        }

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted result".to_string())))
    }
}

/// Session over `tree` with default request and limits.
pub fn session_with(tree: Arc<CategoryTree>, transport: Arc<ScriptedTransport>) -> ImportSession {
    ImportSession::new(
        tree,
        ImportRequest::default(),
        SizeLimits::default(),
        transport,
    )
}

/// One-shot HTTP endpoint that captures the request body and replies with
/// a canned response.
pub struct MockEndpoint {
    pub base_url: String,
    handle: JoinHandle<Option<String>>,
}

impl MockEndpoint {
    /// Starts listening. `status` is the status line tail, e.g. `200 OK`.
    pub async fn respond_once(status: &'static str, body: &'static str) -> Self {
        clear_proxy_env();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener address");

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.ok()?;
            let request_body = read_request_body(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.ok()?;
            let _ = stream.shutdown().await;
            Some(request_body)
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// API config pointing at this endpoint.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            request_timeout_secs: 5,
            connect_timeout_secs: 5,
            ..ApiConfig::default()
        }
    }

    /// The request body the endpoint received.
    pub async fn received_body(self) -> Option<String> {
        self.handle.await.ok().flatten()
    }
}

/// Local addresses must not be routed through a proxy from the test
/// environment.
fn clear_proxy_env() {
    for var in [
        "HTTP_PROXY",
        "http_proxy",
        "HTTPS_PROXY",
        "https_proxy",
        "ALL_PROXY",
        "all_proxy",
    ] {
        std::env::remove_var(var);
    }
}

async fn read_request_body(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let body_start = header_end + 4;
            if buf.len() >= body_start + content_length {
                return String::from_utf8_lossy(&buf[body_start..body_start + content_length])
                    .to_string();
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}
