//! Configuration schema definitions.

use msgloc_catalog::Locale;
use msgloc_common::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale configuration.
    pub locale: LocaleConfig,
    /// Catalog configuration.
    pub catalogs: CatalogConfig,
    /// Error payload configuration.
    pub errors: ErrorsConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Locale configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used when the caller does not supply one.
    pub default: Locale,
}

/// How catalogs are partitioned between entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogLayout {
    /// One catalog serves every lookup.
    #[default]
    Single,
    /// Separate general, response and error catalogs.
    Partitioned,
}

impl CatalogLayout {
    /// Parse a layout name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "partitioned" => Some(Self::Partitioned),
            _ => None,
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog partitioning.
    pub layout: CatalogLayout,
    /// Return the message code itself when a key is missing.
    pub use_code_as_default: bool,
    /// Try the default locale after the requested locale's chain.
    pub fallback_to_default_locale: bool,
}

/// Error payload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorsConfig {
    /// Message of the payload built when no code can be resolved.
    pub default_message: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Logging bootstrap settings derived from this configuration.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            format: self.logging.format,
            file_path: self.logging.file.clone(),
            ..LoggingConfig::default()
        }
    }

    /// Locale used when the caller does not supply one.
    pub const fn default_locale(&self) -> &Locale {
        &self.locale.default
    }
}
