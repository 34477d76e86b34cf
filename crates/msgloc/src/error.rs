//! Error types for building a localizer

use msgloc_common::LoggingError;
use msgloc_config::{CatalogLayout, ConfigError};
use thiserror::Error;

/// Errors raised while assembling a [`Localizer`](crate::Localizer).
///
/// Resolution itself returns catalog errors unchanged.
#[derive(Error, Debug)]
pub enum LocalizerError {
    /// A catalog required by the layout was not supplied
    #[error("{layout:?} catalog layout requires a {role} catalog")]
    MissingCatalog {
        /// Layout that needs the catalog
        layout: CatalogLayout,
        /// Which catalog is missing
        role: &'static str,
    },

    /// The catalog set disagrees with the configured layout
    #[error("configured catalog layout is {configured:?} but the catalog set is {actual:?}")]
    LayoutMismatch {
        /// Layout from configuration
        configured: CatalogLayout,
        /// Layout of the supplied catalog set
        actual: CatalogLayout,
    },

    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be installed
    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Result type for localizer construction
pub type LocalizerResult<T> = Result<T, LocalizerError>;
