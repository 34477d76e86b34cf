//! Error types for catalog lookups

use thiserror::Error;

/// Errors that can occur while resolving a message from a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry for the key anywhere in the locale fallback chain
    #[error("No message found under code '{key}' for locale '{locale}'")]
    Unresolvable {
        /// Requested message code
        key: String,
        /// Requested locale
        locale: String,
    },

    /// The entry exists but could not be formatted with the given params
    #[error("Failed to format message '{key}' for locale '{locale}': {errors:?}")]
    Format {
        /// Message code being formatted
        key: String,
        /// Locale the entry was found in
        locale: String,
        /// Formatter diagnostics
        errors: Vec<String>,
    },

    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLocale(String),

    /// A Fluent resource was rejected while building a bundle
    #[error("Failed to register resource for locale {locale}: {errors:?}")]
    Registration {
        /// Locale of the bundle
        locale: String,
        /// Conflicting or malformed entries
        errors: Vec<String>,
    },
}

impl CatalogError {
    /// Shorthand for an [`CatalogError::Unresolvable`] error
    pub fn unresolvable(key: &str, locale: &crate::Locale) -> Self {
        Self::Unresolvable {
            key: key.to_string(),
            locale: locale.to_string(),
        }
    }

    /// Whether this error means the key is simply missing
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Self::Unresolvable { .. })
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
