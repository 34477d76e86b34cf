//! Runtime validation.

use crate::loader::{ConfigError, ConfigResult};
use crate::schema::Config;

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.errors.default_message.trim().is_empty() {
            return Err(ConfigError::Validation(
                "errors.default_message cannot be empty".to_string(),
            ));
        }

        self.logging_config()
            .validate()
            .map_err(|e| ConfigError::Validation(format!("logging.level: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_blank_default_message_is_rejected() {
        let mut config = Config::default();
        config.errors.default_message = "   ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "msgloc=loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }
}
