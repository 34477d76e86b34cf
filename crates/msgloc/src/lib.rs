//! Message localization for API responses and errors
//!
//! This crate resolves the message codes carried by response and exception
//! entities into locale-specific text and builds structured error payloads.
//! It includes:
//!
//! - The [`Localizable`] contract with [`ApiResponse`] and [`ApiException`]
//! - [`Localizer`], resolving entities, bare codes and deferred producers
//! - [`CatalogSet`] routing lookups to one catalog or to separate
//!   response and error catalogs
//! - [`ErrorResponse`] payloads with HTTP reason phrases
//!
//! # Example
//!
//! ```rust
//! use msgloc::{
//!     ApiException, ApiResponse, CatalogSet, Locale, LocaleContext, Localizable, Localizer,
//!     StaticCatalog, StatusCode,
//! };
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = StaticCatalog::new();
//! catalog
//!     .add_message("user.created", &Locale::english(), "User {0} created")
//!     .add_message("user.missing", &Locale::english(), "No such user");
//!
//! let localizer = Localizer::new(CatalogSet::single(Arc::new(catalog)));
//! let ctx = LocaleContext::default();
//!
//! let response = localizer.resolve(&ctx, ApiResponse::new("user.created").with_param("ada"))?;
//! assert_eq!(response.message(), Some("User ada created"));
//!
//! let payload =
//!     localizer.error_response(&ctx, &ApiException::new("user.missing"), StatusCode::NOT_FOUND)?;
//! assert_eq!(payload.reason(), Some("Not Found"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalogs;
pub mod context;
pub mod deferred;
pub mod entity;
pub mod error;
pub mod localizer;
pub mod payload;

pub use catalogs::{fluent_catalog, static_catalog, CatalogSet};
pub use context::LocaleContext;
pub use deferred::Deferred;
pub use entity::{ApiException, ApiResponse, Details, EntityKind, FieldError, Localizable};
pub use error::{LocalizerError, LocalizerResult};
pub use localizer::Localizer;
pub use payload::ErrorResponse;

pub use http::StatusCode;
pub use msgloc_catalog::{
    params, CatalogError, CatalogResult, FluentCatalog, FluentResource, Locale, MessageCatalog,
    Param, StaticCatalog,
};
pub use msgloc_config::{CatalogLayout, Config, ConfigLoader};

/// Install the global tracing subscriber described by `config.logging`.
pub fn init_logging(config: &Config) -> LocalizerResult<()> {
    msgloc_common::init_logging(config.logging_config())?;
    Ok(())
}
