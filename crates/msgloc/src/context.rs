//! Request-scoped locale context
//!
//! The active locale travels with each request as a value; nothing is read
//! from global or thread-local state.

use msgloc_catalog::Locale;
use msgloc_config::Config;

/// Active locale of one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LocaleContext {
    locale: Locale,
}

impl LocaleContext {
    /// Context for `locale`
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Context using the configured default locale
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_locale().clone())
    }

    /// The active locale
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Copy of this context with another locale
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self { locale }
    }
}

impl From<Locale> for LocaleContext {
    fn from(locale: Locale) -> Self {
        Self::new(locale)
    }
}
