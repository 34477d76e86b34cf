//! The message catalog contract

use crate::error::CatalogResult;
use crate::{Locale, Param};
use std::sync::Arc;

/// A key + locale -> template store with positional parameter substitution.
///
/// Implementations must be read-only after construction; the resolver shares
/// them across threads behind an `Arc`.
pub trait MessageCatalog: Send + Sync {
    /// Resolve `key` for `locale`, substituting `params` by position.
    ///
    /// Fails with [`CatalogError::Unresolvable`](crate::CatalogError::Unresolvable)
    /// when no entry exists anywhere in the catalog's fallback chain.
    fn lookup(&self, key: &str, params: &[Param], locale: &Locale) -> CatalogResult<String>;

    /// Whether `lookup` would find an entry for `key`
    fn contains(&self, key: &str, locale: &Locale) -> bool;

    /// Short name used in log lines
    fn name(&self) -> &str {
        "catalog"
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for Arc<C> {
    fn lookup(&self, key: &str, params: &[Param], locale: &Locale) -> CatalogResult<String> {
        (**self).lookup(key, params, locale)
    }

    fn contains(&self, key: &str, locale: &Locale) -> bool {
        (**self).contains(key, locale)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Walk `locale`'s fallback chain, then `default`'s, without repeats.
pub(crate) fn candidate_locales(locale: &Locale, default: Option<&Locale>) -> Vec<Locale> {
    let mut candidates = locale.fallback_chain();
    if let Some(default) = default {
        for fallback in default.fallback_chain() {
            if !candidates.contains(&fallback) {
                candidates.push(fallback);
            }
        }
    }
    candidates
}
