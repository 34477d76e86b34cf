//! Structured logging infrastructure for msgloc

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, format::FmtSpan},
    layer::{Layered, SubscriberExt},
    registry::Registry,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly output with colors
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON objects
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level string is not a valid `EnvFilter` directive
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// Directive as supplied by the caller
        directive: String,
        #[source]
        source: ParseError,
    },

    /// The log file could not be opened for appending
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        /// Path of the log file
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Another global subscriber is already installed
    #[error("failed to install subscriber: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Result type for logging bootstrap
pub type LoggingResult<T> = Result<T, LoggingError>;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "msgloc=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include span open/close events
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Build the `EnvFilter` described by `level`
    pub fn env_filter(&self) -> LoggingResult<EnvFilter> {
        EnvFilter::try_new(&self.level).map_err(|source| LoggingError::InvalidFilter {
            directive: self.level.clone(),
            source,
        })
    }

    /// Check that the configuration can be installed
    pub fn validate(&self) -> LoggingResult<()> {
        self.env_filter().map(|_| ())
    }
}

type FilteredRegistry = Layered<EnvFilter, Registry>;

fn install<L>(filter: EnvFilter, layer: L) -> LoggingResult<()>
where
    L: Layer<FilteredRegistry> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(layer).try_init()?;
    Ok(())
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> LoggingResult<()> {
    let env_filter = config.env_filter()?;

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let file = match &config.file_path {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile {
                    path: path.display().to_string(),
                    source,
                })?,
        ),
        None => None,
    };

    let base = fmt::layer()
        .with_span_events(span_events)
        .with_target(config.include_targets);

    match (config.format, file) {
        (LogFormat::Json, Some(file)) => {
            install(env_filter, base.json().with_writer(Mutex::new(file)))
        }
        (LogFormat::Json, None) => install(env_filter, base.json()),
        (LogFormat::Compact, Some(file)) => install(
            env_filter,
            base.compact().with_ansi(false).with_writer(Mutex::new(file)),
        ),
        (LogFormat::Compact, None) => install(env_filter, base.compact()),
        (LogFormat::Pretty, Some(file)) => install(
            env_filter,
            base.pretty().with_ansi(false).with_writer(Mutex::new(file)),
        ),
        (LogFormat::Pretty, None) => install(env_filter, base.pretty()),
    }
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> LoggingResult<()> {
    init_logging(LoggingConfig::default())
}

/// Initialize logging for development (pretty, debug level)
pub fn init_dev_logging() -> LoggingResult<()> {
    init_logging(LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Pretty,
        include_spans: true,
        ..LoggingConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_validate_rejects_bad_directive() {
        let config = LoggingConfig {
            level: "msgloc=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { .. }));
    }

    #[test]
    fn test_validate_accepts_module_directives() {
        let config = LoggingConfig {
            level: "warn,msgloc=debug".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_format_from_name() {
        assert_eq!(LogFormat::from_name("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name(" compact "), Some(LogFormat::Compact));
        assert_eq!(LogFormat::from_name("xml"), None);
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file_path: Some(dir.path().join("missing").join("out.log")),
            ..LoggingConfig::default()
        };
        let err = init_logging(config).unwrap_err();
        assert!(matches!(err, LoggingError::LogFile { .. }));
    }
}
