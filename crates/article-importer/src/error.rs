use std::path::PathBuf;
use thiserror::Error;

use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Category catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read category file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse category JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Category tree has no root categories")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ImporterError>;
