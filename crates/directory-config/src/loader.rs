//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use directory_core::DirectoryError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable selecting the configuration environment.
pub const ENVIRONMENT_VAR: &str = "DIRECTORY_ENVIRONMENT";

/// Prefix of configuration override variables (`DIRECTORY__CACHE__ENABLED=false`).
pub const ENV_PREFIX: &str = "DIRECTORY";

/// Configuration loaded once from layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `DIRECTORY__` prefix
    ///
    /// The environment is read from `DIRECTORY_ENVIRONMENT` and defaults to
    /// `development`.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, DirectoryError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::for_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn for_environment(
        config_dir: impl Into<String>,
        environment: impl Into<String>,
    ) -> Result<Self, DirectoryError> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config,
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, DirectoryError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the directory the configuration files were read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Returns the environment this loader was created for.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    fn load_config(config_dir: &str, environment: &str) -> Result<AppConfig, DirectoryError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_directory_error)?;

        if let Err(errors) = ConfigValidator::validate(&app_config) {
            for error in &errors {
                warn!("Invalid configuration: {}", error);
            }
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DirectoryError::Configuration(message));
        }

        Ok(app_config)
    }
}

fn config_error_to_directory_error(err: ConfigError) -> DirectoryError {
    DirectoryError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn dir_str(dir: &TempDir) -> String {
        dir.path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_empty_directory_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::for_environment(dir_str(&dir), "test").unwrap();

        let config = loader.get();
        assert_eq!(config.server.rest_port, 8080);
        assert_eq!(config.cache.item_ttl_secs, 300);
        assert_eq!(loader.environment(), "test");
        assert_eq!(loader.config_dir(), dir_str(&dir));
    }

    #[test]
    fn test_layers_override_in_order() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[server]\nrest_port = 9000\n\n[cache]\nitem_ttl_secs = 10\nlist_ttl_secs = 20\n",
        );
        write(&dir, "staging.toml", "[cache]\nitem_ttl_secs = 30\n");
        write(&dir, "local.toml", "[server]\nrest_port = 9100\n");

        let loader = ConfigLoader::for_environment(dir_str(&dir), "staging").unwrap();
        let config = loader.get();

        assert_eq!(config.server.rest_port, 9100);
        assert_eq!(config.cache.item_ttl_secs, 30);
        assert_eq!(config.cache.list_ttl_secs, 20);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[database]\nurl = \"\"\n");

        let result = ConfigLoader::for_environment(dir_str(&dir), "test");
        assert!(matches!(result, Err(DirectoryError::Configuration(_))));
    }
}
