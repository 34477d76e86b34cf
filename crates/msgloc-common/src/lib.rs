//! # msgloc common
//!
//! Logging bootstrap and test helpers shared by every crate in the msgloc
//! workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::{
    init_default_logging, init_dev_logging, init_logging, LogFormat, LoggingConfig, LoggingError,
    LoggingResult,
};
