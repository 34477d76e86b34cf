//! # msgloc config
//!
//! Type-safe configuration for the msgloc resolver.
//!
//! This crate provides the TOML schema, defaults, environment overrides and
//! validation for the default locale, catalog layout, error payload defaults
//! and logging.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::DEFAULT_ERROR_MESSAGE;
pub use loader::*;
pub use schema::*;
