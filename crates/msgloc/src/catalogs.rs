//! Routing between general, response and error catalogs

use crate::entity::EntityKind;
use crate::error::{LocalizerError, LocalizerResult};
use msgloc_catalog::{FluentCatalog, MessageCatalog, StaticCatalog};
use msgloc_config::{CatalogLayout, Config};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// The catalogs a [`Localizer`](crate::Localizer) resolves against.
///
/// With a single catalog every role points at the same instance.
#[derive(Clone)]
pub struct CatalogSet {
    layout: CatalogLayout,
    general: Arc<dyn MessageCatalog>,
    response: Arc<dyn MessageCatalog>,
    error: Arc<dyn MessageCatalog>,
}

impl CatalogSet {
    /// Route every lookup through one catalog
    pub fn single(catalog: Arc<dyn MessageCatalog>) -> Self {
        info!(catalog = catalog.name(), "Using single catalog layout");
        Self {
            layout: CatalogLayout::Single,
            general: Arc::clone(&catalog),
            response: Arc::clone(&catalog),
            error: catalog,
        }
    }

    /// Separate catalogs for general, response-kind and error-kind lookups
    pub fn partitioned(
        general: Arc<dyn MessageCatalog>,
        response: Arc<dyn MessageCatalog>,
        error: Arc<dyn MessageCatalog>,
    ) -> Self {
        info!(
            general = general.name(),
            response = response.name(),
            error = error.name(),
            "Using partitioned catalog layout"
        );
        Self {
            layout: CatalogLayout::Partitioned,
            general,
            response,
            error,
        }
    }

    /// Build the set `layout` asks for.
    ///
    /// `Partitioned` needs both optional catalogs; `Single` ignores them.
    pub fn from_layout(
        layout: CatalogLayout,
        general: Arc<dyn MessageCatalog>,
        response: Option<Arc<dyn MessageCatalog>>,
        error: Option<Arc<dyn MessageCatalog>>,
    ) -> LocalizerResult<Self> {
        match layout {
            CatalogLayout::Single => {
                if response.is_some() || error.is_some() {
                    warn!("Single catalog layout configured, ignoring response/error catalogs");
                }
                Ok(Self::single(general))
            }
            CatalogLayout::Partitioned => {
                let response = response.ok_or(LocalizerError::MissingCatalog {
                    layout,
                    role: "response",
                })?;
                let error = error.ok_or(LocalizerError::MissingCatalog {
                    layout,
                    role: "error",
                })?;
                Ok(Self::partitioned(general, response, error))
            }
        }
    }

    /// Layout this set was built with
    pub fn layout(&self) -> CatalogLayout {
        self.layout
    }

    /// Catalog for direct lookups
    pub fn general(&self) -> &dyn MessageCatalog {
        self.general.as_ref()
    }

    /// Catalog for response-kind entities
    pub fn response(&self) -> &dyn MessageCatalog {
        self.response.as_ref()
    }

    /// Catalog for error-kind entities and error payloads
    pub fn error(&self) -> &dyn MessageCatalog {
        self.error.as_ref()
    }

    /// Catalog serving entities of `kind`
    pub fn for_kind(&self, kind: EntityKind) -> &dyn MessageCatalog {
        match kind {
            EntityKind::Response => self.response(),
            EntityKind::Error => self.error(),
        }
    }
}

impl fmt::Debug for CatalogSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogSet")
            .field("layout", &self.layout)
            .field("general", &self.general.name())
            .field("response", &self.response.name())
            .field("error", &self.error.name())
            .finish()
    }
}

/// Empty [`StaticCatalog`] with the fallback options from `config`
pub fn static_catalog(config: &Config, name: &str) -> StaticCatalog {
    let catalog = StaticCatalog::new()
        .with_name(name)
        .use_code_as_default(config.catalogs.use_code_as_default);

    if config.catalogs.fallback_to_default_locale {
        catalog.with_default_locale(config.default_locale().clone())
    } else {
        catalog
    }
}

/// Empty [`FluentCatalog`] with the fallback options from `config`
pub fn fluent_catalog(config: &Config, name: &str) -> FluentCatalog {
    let catalog = FluentCatalog::new()
        .with_name(name)
        .use_code_as_default(config.catalogs.use_code_as_default);

    if config.catalogs.fallback_to_default_locale {
        catalog.with_default_locale(config.default_locale().clone())
    } else {
        catalog
    }
}
