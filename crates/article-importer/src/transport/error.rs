use thiserror::Error;

/// Failures of the import call. The workflow only observes that one
/// happened; the detail is kept for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The request never produced a response (connect, timeout, I/O).
    #[error("Import request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("Import endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not an article count.
    #[error("Failed to decode import count: {0}")]
    Decode(String),
}
