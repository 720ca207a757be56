//! HTTP transport for the article import endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;

use crate::config::ApiConfig;
use crate::request::ImportRequest;

use super::error::TransportError;
use super::ArticleTransport;

/// Maximum length for response bodies echoed into errors and logs.
const MAX_ERROR_BODY_LENGTH: usize = 200;

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_LENGTH) {
        Some((cut, _)) => format!("{}... (truncated)", &body[..cut]),
        None => body.to_string(),
    }
}

/// Joins the configured base URL and endpoint path with exactly one slash.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

fn create_http_client(connect_timeout: Duration, timeout: Duration) -> Result<Client, TransportError> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(timeout)
        .build()
        .map_err(|e| TransportError::Client(e.to_string()))
}

/// Posts import requests as JSON and reads back the imported count.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = create_http_client(
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self {
            client,
            url: endpoint_url(&config.base_url, &config.endpoint),
        })
    }

    /// Full URL requests are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ArticleTransport for HttpTransport {
    async fn import_articles(&self, request: &ImportRequest) -> Result<u64, TransportError> {
        info!(
            "Requesting import of {} articles from {} (category: '{}')",
            request.size, self.url, request.category
        );

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Import request to {} failed: {}", self.url, e);
                TransportError::Request(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let body = truncate_body(&body);
            warn!("Import endpoint returned {}: {}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let count: u64 = serde_json::from_str(body.trim()).map_err(|e| {
            let body = truncate_body(&body);
            warn!("Import endpoint returned an unreadable count '{}': {}", body, e);
            TransportError::Decode(format!("{} (body: {})", e, body))
        })?;

        debug!("Import endpoint reported {} imported articles", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_with_single_slash() {
        assert_eq!(
            endpoint_url("http://localhost:8000", "/import_articles/"),
            "http://localhost:8000/import_articles/"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000/", "import_articles/"),
            "http://localhost:8000/import_articles/"
        );
        assert_eq!(
            endpoint_url("http://api.example.com/v1//", "//import_articles/"),
            "http://api.example.com/v1/import_articles/"
        );
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");

        let long = "x".repeat(300);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("... (truncated)"));
        assert_eq!(truncated.len(), MAX_ERROR_BODY_LENGTH + "... (truncated)".len());
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        let long = "é".repeat(250);
        let truncated = truncate_body(&long);
        assert!(truncated.starts_with(&"é".repeat(MAX_ERROR_BODY_LENGTH)));
    }

    #[test]
    fn test_transport_creation_uses_config() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9000/".to_string(),
            ..ApiConfig::default()
        };
        let transport = HttpTransport::new(&config).expect("should create transport");
        assert_eq!(transport.url(), "http://127.0.0.1:9000/import_articles/");
    }
}
