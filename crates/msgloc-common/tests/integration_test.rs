//! Logging bootstrap against the real global subscriber.
//!
//! Kept in its own test binary since a subscriber can be installed only once
//! per process.

use msgloc_common::{init_default_logging, init_logging, LogFormat, LoggingConfig, LoggingError};

#[test]
fn test_json_file_logging_and_single_install() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("msgloc.log");

    init_logging(LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        file_path: Some(path.clone()),
        ..LoggingConfig::default()
    })
    .unwrap();

    tracing::info!(code = "order.shipped", "Resolved message");

    let contents = std::fs::read_to_string(&path).unwrap();
    let line = contents.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["fields"]["message"], "Resolved message");
    assert_eq!(event["fields"]["code"], "order.shipped");

    let err = init_default_logging().unwrap_err();
    assert!(matches!(err, LoggingError::AlreadyInitialized(_)));
}
