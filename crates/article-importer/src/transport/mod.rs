//! Outbound import call.
//!
//! The workflow only sees [`ArticleTransport`]; [`HttpTransport`] is the
//! production implementation talking to the import endpoint.

pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::request::ImportRequest;

pub use error::TransportError;
pub use http::HttpTransport;

/// Performs one import and reports how many articles were imported.
#[async_trait]
pub trait ArticleTransport: Send + Sync {
    async fn import_articles(&self, request: &ImportRequest) -> Result<u64, TransportError>;
}
