//! Configuration validation.
//!
//! Every section is checked and all problems are reported together, so a
//! misconfigured deployment fails fast at startup with the full list.

use crate::{AppConfig, CacheConfig, DatabaseConfig, ObservabilityConfig, ServerConfig};
use thiserror::Error;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// Port number is invalid.
    #[error("Invalid port for {name}: {value} (must be 1-65535)")]
    InvalidPort { name: String, value: u16 },

    /// Pool size configuration is invalid (min must be <= max).
    #[error("Invalid pool size: min ({min}) cannot be greater than max ({max})")]
    InvalidPoolSize { min: u32, max: u32 },

    /// URL format is invalid.
    #[error("Invalid {url_type} URL: {message}")]
    InvalidUrl { url_type: String, message: String },

    /// A TTL or timeout must be positive.
    #[error("'{name}' must be positive, got {value}")]
    NonPositive { name: String, value: u64 },

    /// Log level is invalid.
    #[error("Invalid log level: '{value}' (valid: trace, debug, info, warn, error)")]
    InvalidLogLevel { value: String },

    /// Log format is invalid.
    #[error("Invalid log format: '{value}' (valid: json, pretty)")]
    InvalidLogFormat { value: String },
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    const VALID_LOG_FORMATS: &'static [&'static str] = &["json", "pretty"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_cache(&config.cache, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.rest_port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "rest_port".to_string(),
                value: config.rest_port,
            });
        }
        if config.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_database(config: &DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.url.trim().is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !config.url.starts_with("sqlite:") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with sqlite:".to_string(),
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "database.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_cache(config: &CacheConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.item_ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "cache.item_ttl_secs".to_string(),
                value: 0,
            });
        }
        if config.list_ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositive {
                name: "cache.list_ttl_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_observability(config: &ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        let format = config.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}
