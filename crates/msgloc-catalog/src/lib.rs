//! Message catalogs for msgloc
//!
//! A catalog maps a message code and a locale to a template and substitutes
//! positional parameters into it. This crate provides:
//!
//! - the [`MessageCatalog`] contract consumed by the resolver
//! - [`StaticCatalog`], a programmatic store with `{0}`-style placeholders
//! - [`FluentCatalog`], an adapter over pre-parsed Fluent resources
//! - [`Locale`] with region/script fallback chains
//!
//! # Example
//!
//! ```rust
//! use msgloc_catalog::{params, Locale, MessageCatalog, StaticCatalog};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let en_us = Locale::from_code("en_US")?;
//! let mut catalog = StaticCatalog::new();
//! catalog.add_message("order.shipped", &en_us, "Order {0} has shipped");
//!
//! let message = catalog.lookup("order.shipped", &params!["A-17"], &en_us)?;
//! assert_eq!(message, "Order A-17 has shipped");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod fluent_catalog;
pub mod format;
pub mod locale;
pub mod param;
pub mod static_catalog;

pub use catalog::MessageCatalog;
pub use error::{CatalogError, CatalogResult};
pub use fluent_catalog::FluentCatalog;
pub use format::substitute;
pub use locale::Locale;
pub use param::Param;
pub use static_catalog::StaticCatalog;

// Re-export the Fluent types callers need to build resources
pub use fluent_bundle::FluentResource;
