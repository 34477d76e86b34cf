//! Configuration loading utilities

use crate::schema::{CatalogLayout, Config};
use msgloc_catalog::Locale;
use msgloc_common::LogFormat;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "MSGLOC_CONFIG";
/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "msgloc.toml";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// Path that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {message}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Why the value was rejected
        message: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse, apply process environment overrides and validate.
    pub fn load_from_str(content: &str) -> ConfigResult<Config> {
        Self::load_from_str_with_env(content, |var| env::var(var).ok())
    }

    /// Like [`ConfigLoader::load_from_str`] with an injected variable lookup.
    pub fn load_from_str_with_env<F>(content: &str, lookup: F) -> ConfigResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = toml::from_str(content)?;
        Self::apply_env_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Config> {
        let path = path.as_ref();
        debug!("Loading configuration file: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Discover configuration: `$MSGLOC_CONFIG`, then `msgloc.toml`, then defaults.
    pub fn load() -> ConfigResult<Config> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_from_file(path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::load_from_file(DEFAULT_CONFIG_FILE);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MSGLOC_*` overrides obtained through `lookup`
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("MSGLOC_DEFAULT_LOCALE") {
            config.locale.default =
                Locale::from_code(&code).map_err(|e| ConfigError::EnvParse {
                    var: "MSGLOC_DEFAULT_LOCALE".to_string(),
                    message: e.to_string(),
                })?;
        }

        if let Some(layout) = lookup("MSGLOC_CATALOG_LAYOUT") {
            config.catalogs.layout =
                CatalogLayout::from_name(&layout).ok_or_else(|| ConfigError::EnvParse {
                    var: "MSGLOC_CATALOG_LAYOUT".to_string(),
                    message: format!("unknown layout '{layout}', expected single or partitioned"),
                })?;
        }

        if let Some(level) = lookup("MSGLOC_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("MSGLOC_LOG_FORMAT") {
            config.logging.format =
                LogFormat::from_name(&format).ok_or_else(|| ConfigError::EnvParse {
                    var: "MSGLOC_LOG_FORMAT".to_string(),
                    message: format!("unknown format '{format}', expected pretty, compact or json"),
                })?;
        }

        if let Some(message) = lookup("MSGLOC_DEFAULT_ERROR_MESSAGE") {
            config.errors.default_message = message;
        }

        Ok(())
    }
}
