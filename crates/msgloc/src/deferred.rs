//! Lazily produced entities

use crate::entity::Localizable;
use crate::localizer::Localizer;
use msgloc_catalog::{CatalogResult, Locale};
use std::fmt;
use std::marker::PhantomData;

/// An entity producer paired with the localizer that will resolve its output.
///
/// Nothing runs until [`Deferred::force`] or [`Deferred::force_in`]; the
/// supplier is consumed by either, so it is invoked at most once.
#[must_use = "a deferred entity does nothing until forced"]
pub struct Deferred<'a, E, F>
where
    F: FnOnce() -> Option<E>,
{
    localizer: &'a Localizer,
    locale: Locale,
    supplier: F,
    produces: PhantomData<fn() -> E>,
}

impl<'a, E, F> Deferred<'a, E, F>
where
    E: Localizable,
    F: FnOnce() -> Option<E>,
{
    pub(crate) fn new(localizer: &'a Localizer, locale: Locale, supplier: F) -> Self {
        Self {
            localizer,
            locale,
            supplier,
            produces: PhantomData,
        }
    }

    /// Locale captured when the deferral was created
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Run the supplier and resolve what it produced
    pub fn force(self) -> CatalogResult<Option<E>> {
        let Self {
            localizer,
            locale,
            supplier,
            ..
        } = self;
        localizer.resolve_optional_in(&locale, supplier())
    }

    /// Like [`Deferred::force`] with a locale chosen at consumption time
    pub fn force_in(self, locale: &Locale) -> CatalogResult<Option<E>> {
        self.localizer.resolve_optional_in(locale, (self.supplier)())
    }
}

impl<E, F> fmt::Debug for Deferred<'_, E, F>
where
    F: FnOnce() -> Option<E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
