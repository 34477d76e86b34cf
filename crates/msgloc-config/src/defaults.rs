//! Default values.

use crate::schema::{
    CatalogConfig, CatalogLayout, Config, ErrorsConfig, LocaleConfig, LoggingSettings,
};
use msgloc_catalog::Locale;
use msgloc_common::LogFormat;

/// Message of the payload built when no code can be resolved.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error has occurred";

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            catalogs: CatalogConfig::default(),
            errors: ErrorsConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: Locale::english(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            layout: CatalogLayout::Single,
            use_code_as_default: false,
            fallback_to_default_locale: true,
        }
    }
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file: None,
        }
    }
}
