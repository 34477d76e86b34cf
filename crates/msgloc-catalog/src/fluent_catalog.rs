//! Catalog backed by Fluent bundles
//!
//! Positional params are exposed to Fluent patterns as `$arg0`, `$arg1`, ...
//! so a template reads `order-shipped = Order {$arg0} has shipped`.

use crate::catalog::{candidate_locales, MessageCatalog};
use crate::error::{CatalogError, CatalogResult};
use crate::{Locale, Param};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// Fluent bundles, one per locale, behind the [`MessageCatalog`] contract.
///
/// Resources are supplied already parsed; this type never touches the
/// filesystem.
pub struct FluentCatalog {
    name: String,
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    default_locale: Option<Locale>,
    use_code_as_default: bool,
}

impl std::fmt::Debug for FluentCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluentCatalog")
            .field("name", &self.name)
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .field("default_locale", &self.default_locale)
            .field("use_code_as_default", &self.use_code_as_default)
            .finish()
    }
}

impl FluentCatalog {
    /// Create a catalog with no bundles
    pub fn new() -> Self {
        Self {
            name: "fluent".to_string(),
            bundles: HashMap::new(),
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

    /// Add a resource to a locale's bundle.
    ///
    /// On a conflict Fluent still registers the entries that do not clash,
    /// so a failed call can leave the bundle partially extended. Only the
    /// clashing ids are reported in [`CatalogError::Registration`].
    pub fn add_resource(&mut self, locale: &Locale, resource: FluentResource) -> CatalogResult<()> {
        let name = &self.name;
        let bundle = self.bundles.entry(locale.clone()).or_insert_with(|| {
            let mut bundle =
                FluentBundle::new_concurrent(vec![locale.language_identifier().clone()]);
            // Isolation marks would leak into API payloads
            bundle.set_use_isolating(false);
            bundle
        });

        bundle.add_resource(resource).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| format!("{e:?}")).collect();

            error!(
                catalog = %name,
                %locale,
                "Failed to add resource to bundle: {:?}",
                error_messages
            );

            CatalogError::Registration {
                locale: locale.to_string(),
                errors: error_messages,
            }
        })?;

        info!(catalog = %name, %locale, "Added resource to bundle");
        Ok(())
    }

    /// Get all locales with a bundle
    pub fn available_locales(&self) -> Vec<&Locale> {
        self.bundles.keys().collect()
    }

    fn find_bundle(
        &self,
        key: &str,
        locale: &Locale,
    ) -> Option<(&Locale, &FluentBundle<FluentResource>)> {
        candidate_locales(locale, self.default_locale.as_ref())
            .into_iter()
            .find_map(|candidate| {
                let (stored, bundle) = self.bundles.get_key_value(&candidate)?;
                bundle
                    .get_message(key)
                    .and_then(|message| message.value())
                    .map(|_| (stored, bundle))
            })
    }
}

impl Default for FluentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn positional_args(params: &[Param]) -> FluentArgs<'static> {
    let mut args = FluentArgs::new();
    for (index, param) in params.iter().enumerate() {
        args.set(format!("arg{index}"), param.to_fluent_value());
    }
    args
}

impl MessageCatalog for FluentCatalog {
    fn lookup(&self, key: &str, params: &[Param], locale: &Locale) -> CatalogResult<String> {
        let Some((found_in, bundle)) = self.find_bundle(key, locale) else {
            if self.use_code_as_default {
                debug!(catalog = %self.name, key, %locale, "Using code as default message");
                return Ok(key.to_string());
            }
            return Err(CatalogError::unresolvable(key, locale));
        };

        if found_in != locale {
            warn!(
                catalog = %self.name,
                key,
                requested = %locale,
                resolved = %found_in,
                "Message not found in requested locale, using fallback"
            );
        }

        let pattern = bundle
            .get_message(key)
            .and_then(|message| message.value())
            .ok_or_else(|| CatalogError::unresolvable(key, locale))?;

        let args = positional_args(params);
        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, Some(&args), &mut errors);

        if !errors.is_empty() {
            let error_messages: Vec<String> = errors.iter().map(|e| format!("{e:?}")).collect();

            warn!(catalog = %self.name, key, "Formatting errors for message: {:?}", error_messages);

            return Err(CatalogError::Format {
                key: key.to_string(),
                locale: found_in.to_string(),
                errors: error_messages,
            });
        }

        debug!(catalog = %self.name, key, locale = %found_in, "Resolved message");
        Ok(formatted.into_owned())
    }

    fn contains(&self, key: &str, locale: &Locale) -> bool {
        self.find_bundle(key, locale).is_some()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    fn resource(source: &str) -> FluentResource {
        FluentResource::try_new(source.to_string()).expect("valid test resource")
    }

    #[test]
    fn test_positional_args_are_named_by_index() {
        let mut catalog = FluentCatalog::new();
        catalog
            .add_resource(
                &Locale::english(),
                resource("moved = Moved {$arg0} to {$arg1}\n"),
            )
            .unwrap();

        let message = catalog
            .lookup("moved", &params!["report.pdf", "archive"], &Locale::english())
            .unwrap();
        assert_eq!(message, "Moved report.pdf to archive");
    }

    #[test]
    fn test_missing_argument_is_a_format_error() {
        let mut catalog = FluentCatalog::new();
        catalog
            .add_resource(&Locale::english(), resource("welcome = Welcome, {$arg0}!\n"))
            .unwrap();

        let err = catalog.lookup("welcome", &[], &Locale::english()).unwrap_err();
        assert!(matches!(err, CatalogError::Format { .. }));
    }

    #[test]
    fn test_duplicate_message_is_a_registration_error() {
        let mut catalog = FluentCatalog::new();
        catalog
            .add_resource(&Locale::english(), resource("hello = Hello\n"))
            .unwrap();
        let err = catalog
            .add_resource(&Locale::english(), resource("hello = Hi\n"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Registration { .. }));
    }

    #[test]
    fn test_partial_conflict_keeps_new_entries() {
        let mut catalog = FluentCatalog::new();
        catalog
            .add_resource(&Locale::english(), resource("hello = Hello\n"))
            .unwrap();
        let err = catalog
            .add_resource(&Locale::english(), resource("hello = Hi\nbye = Bye\n"))
            .unwrap_err();

        assert!(matches!(err, CatalogError::Registration { .. }));
        assert_eq!(catalog.lookup("hello", &[], &Locale::english()).unwrap(), "Hello");
        assert_eq!(catalog.lookup("bye", &[], &Locale::english()).unwrap(), "Bye");
    }

    #[test]
    fn test_use_code_as_default_on_miss() {
        let catalog = FluentCatalog::new().use_code_as_default(true);

        let message = catalog.lookup("order.missing", &[], &Locale::english()).unwrap();
        assert_eq!(message, "order.missing");
        assert!(!catalog.contains("order.missing", &Locale::english()));
    }

    #[test]
    fn test_message_without_value_is_unresolvable() {
        let mut catalog = FluentCatalog::new();
        catalog
            .add_resource(&Locale::english(), resource("login =\n    .placeholder = Email\n"))
            .unwrap();

        assert!(!catalog.contains("login", &Locale::english()));
        let err = catalog.lookup("login", &[], &Locale::english()).unwrap_err();
        assert!(err.is_unresolvable());
    }
}
