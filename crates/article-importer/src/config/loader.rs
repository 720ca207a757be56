use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::schema::ImporterConfig;
use crate::error::ConfigError;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "ARTICLE_IMPORTER_API_URL";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ImporterConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<ImporterConfig, ConfigError> {
    let mut config: ImporterConfig = serde_json::from_str(content)?;

    apply_env_overrides(&mut config);

    validate_config(&config)?;

    Ok(config)
}

/// `<platform config dir>/article-importer/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("article-importer").join("config.json"))
}

/// Loads the config at the default location, falling back to built-in
/// defaults when no file exists there.
pub fn load_default_config() -> Result<ImporterConfig, ConfigError> {
    match default_config_path() {
        Some(path) if path.exists() => {
            info!("Loading configuration from {:?}", path);
            load_config(path)
        }
        _ => {
            debug!("No configuration file found; using defaults");
            let mut config = ImporterConfig::default();
            apply_env_overrides(&mut config);
            validate_config(&config)?;
            Ok(config)
        }
    }
}

pub fn apply_env_overrides(config: &mut ImporterConfig) {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            debug!("Overriding api.base_url from {}", API_URL_ENV);
            config.api.base_url = url;
        }
    }
}

fn validate_config(config: &ImporterConfig) -> Result<(), ConfigError> {
    if config.version != "1.0" {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    let url = reqwest::Url::parse(&config.api.base_url).map_err(|e| ConfigError::Validation {
        message: format!("Invalid api.base_url '{}': {}", config.api.base_url, e),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation {
            message: format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            ),
        });
    }

    if config.api.connect_timeout_secs == 0 || config.api.request_timeout_secs == 0 {
        return Err(ConfigError::Validation {
            message: "API timeouts must be greater than zero".to_string(),
        });
    }

    let form = &config.form;
    if form.min_size < 1 {
        return Err(ConfigError::Validation {
            message: format!("form.min_size must be at least 1, got {}", form.min_size),
        });
    }
    if !(form.min_size <= form.default_size && form.default_size <= form.max_size) {
        return Err(ConfigError::Validation {
            message: format!(
                "form sizes must satisfy min_size <= default_size <= max_size (got {} / {} / {})",
                form.min_size, form.default_size, form.max_size
            ),
        });
    }

    match config.logging.format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(ConfigError::Validation {
                message: format!("Unsupported logging format: {}", other),
            })
        }
    }

    Ok(())
}
