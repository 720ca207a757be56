use serde::{Deserialize, Serialize};

use crate::request::{SizeLimits, DEFAULT_SIZE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImporterConfig {
    pub version: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub categories: CategoriesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            api: ApiConfig::default(),
            form: FormConfig::default(),
            categories: CategoriesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Where import requests are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_endpoint() -> String {
    "/import_articles/".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Bounds and initial value of the article count field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_size")]
    pub default_size: i64,
    #[serde(default = "default_min_size")]
    pub min_size: i64,
    #[serde(default = "default_max_size")]
    pub max_size: i64,
}

fn default_size() -> i64 {
    DEFAULT_SIZE
}

fn default_min_size() -> i64 {
    1
}

fn default_max_size() -> i64 {
    99
}

impl FormConfig {
    pub fn size_limits(&self) -> SizeLimits {
        SizeLimits {
            min: self.min_size,
            max: self.max_size,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            min_size: default_min_size(),
            max_size: default_max_size(),
        }
    }
}

/// Category dataset location. `None` uses the built-in taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesConfig {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `text` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
