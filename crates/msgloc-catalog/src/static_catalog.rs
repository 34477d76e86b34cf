//! Programmatic in-memory catalog

use crate::catalog::{candidate_locales, MessageCatalog};
use crate::error::{CatalogError, CatalogResult};
use crate::format::substitute;
use crate::{Locale, Param};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Key/locale -> template store filled in code.
///
/// Templates use positional `{0}`, `{1}`, ... placeholders.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    name: String,
    messages: HashMap<Locale, HashMap<String, String>>,
    default_locale: Option<Locale>,
    use_code_as_default: bool,
}

impl StaticCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            name: "static".to_string(),
            messages: HashMap::new(),
            default_locale: None,
            use_code_as_default: false,
        }
    }

    /// Set the name reported in log lines
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Fall back to this locale's chain after the requested one is exhausted
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    /// Return the key itself instead of failing on a miss
    pub fn use_code_as_default(mut self, enabled: bool) -> Self {
        self.use_code_as_default = enabled;
        self
    }

    /// Register a template
    pub fn add_message(
        &mut self,
        key: impl Into<String>,
        locale: &Locale,
        template: impl Into<String>,
    ) -> &mut Self {
        self.messages
            .entry(locale.clone())
            .or_default()
            .insert(key.into(), template.into());
        self
    }

    /// Register several templates for one locale
    pub fn add_messages<K, V>(
        &mut self,
        locale: &Locale,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let bucket = self.messages.entry(locale.clone()).or_default();
        for (key, template) in entries {
            bucket.insert(key.into(), template.into());
        }
        self
    }

    /// Number of registered templates across all locales
    pub fn len(&self) -> usize {
        self.messages.values().map(HashMap::len).sum()
    }

    /// Whether no template is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find_template(&self, key: &str, locale: &Locale) -> Option<(&Locale, &str)> {
        candidate_locales(locale, self.default_locale.as_ref())
            .into_iter()
            .find_map(|candidate| {
                let (stored, bucket) = self.messages.get_key_value(&candidate)?;
                bucket.get(key).map(|template| (stored, template.as_str()))
            })
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCatalog for StaticCatalog {
    fn lookup(&self, key: &str, params: &[Param], locale: &Locale) -> CatalogResult<String> {
        match self.find_template(key, locale) {
            Some((found_in, template)) => {
                if found_in != locale {
                    warn!(
                        catalog = %self.name,
                        key,
                        requested = %locale,
                        resolved = %found_in,
                        "Message not found in requested locale, using fallback"
                    );
                }
                debug!(catalog = %self.name, key, locale = %found_in, "Resolved message");
                Ok(substitute(template, params))
            }
            None if self.use_code_as_default => {
                debug!(
                    catalog = %self.name,
                    key,
                    locale = %locale,
                    "Using code as default message"
                );
                Ok(key.to_string())
            }
            None => Err(CatalogError::unresolvable(key, locale)),
        }
    }

    fn contains(&self, key: &str, locale: &Locale) -> bool {
        self.find_template(key, locale).is_some()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    fn us() -> Locale {
        Locale::from_code("en_US").unwrap()
    }

    #[test]
    fn test_lookup_without_params() {
        let mut catalog = StaticCatalog::new();
        catalog.add_message("test.key", &us(), "Test Message");

        assert_eq!(catalog.lookup("test.key", &[], &us()).unwrap(), "Test Message");
    }

    #[test]
    fn test_lookup_substitutes_params() {
        let mut catalog = StaticCatalog::new();
        catalog.add_message("response2.key", &us(), "Response Message {0}");

        let message = catalog
            .lookup("response2.key", &params!["Two"], &us())
            .unwrap();
        assert_eq!(message, "Response Message Two");
    }

    #[test]
    fn test_missing_key_is_unresolvable() {
        let catalog = StaticCatalog::new();
        let err = catalog.lookup("missing.key", &[], &us()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Unresolvable {
                key: "missing.key".to_string(),
                locale: "en-US".to_string(),
            }
        );
    }

    #[test]
    fn test_language_fallback() {
        let mut catalog = StaticCatalog::new();
        catalog.add_message("greeting", &Locale::from_code("fr").unwrap(), "Bonjour");

        let message = catalog
            .lookup("greeting", &[], &Locale::from_code("fr-CA").unwrap())
            .unwrap();
        assert_eq!(message, "Bonjour");
    }

    #[test]
    fn test_default_locale_fallback() {
        let mut catalog = StaticCatalog::new().with_default_locale(us());
        catalog.add_message("greeting", &us(), "Hello");

        let german = Locale::from_code("de-DE").unwrap();
        assert_eq!(catalog.lookup("greeting", &[], &german).unwrap(), "Hello");
        assert!(catalog.contains("greeting", &german));
    }

    #[test]
    fn test_no_default_locale_means_no_cross_language_fallback() {
        let mut catalog = StaticCatalog::new();
        catalog.add_message("greeting", &us(), "Hello");

        let german = Locale::from_code("de-DE").unwrap();
        assert!(catalog.lookup("greeting", &[], &german).is_err());
        assert!(!catalog.contains("greeting", &german));
    }

    #[test]
    fn test_use_code_as_default() {
        let catalog = StaticCatalog::new().use_code_as_default(true);
        assert_eq!(catalog.lookup("error.unknown", &[], &us()).unwrap(), "error.unknown");
        assert!(!catalog.contains("error.unknown", &us()));
    }

    #[test]
    fn test_add_messages_and_len() {
        let mut catalog = StaticCatalog::new().with_name("responses");
        assert!(catalog.is_empty());
        catalog.add_messages(&us(), [("a", "A"), ("b", "B")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name(), "responses");
    }
}
