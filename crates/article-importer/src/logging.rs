//! Structured logging setup.
//!
//! Library code logs through both `tracing` and `log`; `init_logging`
//! routes both into one `tracing-subscriber` pipeline.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingConfig;
use crate::error::ConfigError;

/// Builds the filter: `RUST_LOG` wins, then the configured level.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        ConfigError::Logging(format!("Invalid log level '{}': {}", config.level, e))
    })
}

/// Installs the global subscriber. Returns `Ok(false)` if one was already
/// installed.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let filter = build_env_filter(config)?;

    let installed = match config.format.as_str() {
        "json" => Registry::default()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .is_ok(),
        "text" => Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .is_ok(),
        other => {
            return Err(ConfigError::Logging(format!(
                "Unsupported logging format: {}",
                other
            )))
        }
    };

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "article_importer=notalevel".to_string(),
            format: "text".to_string(),
        };
        assert!(matches!(
            build_env_filter(&config),
            Err(ConfigError::Logging(_))
        ));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "xml".to_string(),
        };
        assert!(matches!(
            init_logging(&config),
            Err(ConfigError::Logging(_))
        ));
    }

    #[test]
    fn test_second_init_is_not_an_error() {
        let config = LoggingConfig::default();
        let first = init_logging(&config).unwrap();
        let second = init_logging(&config).unwrap();
        assert!(!(first && second));
    }
}
