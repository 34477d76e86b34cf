//! Message resolution for entities and error payloads

use crate::catalogs::CatalogSet;
use crate::context::LocaleContext;
use crate::deferred::Deferred;
use crate::entity::{EntityKind, Localizable};
use crate::error::{LocalizerError, LocalizerResult};
use crate::payload::ErrorResponse;
use http::StatusCode;
use msgloc_catalog::{CatalogResult, Locale, Param};
use msgloc_config::{Config, DEFAULT_ERROR_MESSAGE};
use tracing::{debug, info, instrument};

/// Resolves message codes against a [`CatalogSet`].
///
/// Every operation comes in two forms: one taking a [`LocaleContext`] and an
/// `_in` form taking the locale directly. Only an entity's message field is
/// ever written; catalog errors are returned as-is.
#[derive(Debug, Clone)]
pub struct Localizer {
    catalogs: CatalogSet,
    default_error_message: String,
}

/// An empty code counts as no code.
fn present(code: Option<&str>) -> Option<&str> {
    code.filter(|code| !code.is_empty())
}

impl Localizer {
    /// Localizer with the built-in generic error message
    pub fn new(catalogs: CatalogSet) -> Self {
        Self {
            catalogs,
            default_error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }

    /// Localizer honoring `config`; the catalog set must match its layout
    pub fn from_config(config: &Config, catalogs: CatalogSet) -> LocalizerResult<Self> {
        config.validate()?;

        if catalogs.layout() != config.catalogs.layout {
            return Err(LocalizerError::LayoutMismatch {
                configured: config.catalogs.layout,
                actual: catalogs.layout(),
            });
        }

        info!(
            layout = ?config.catalogs.layout,
            default_locale = %config.default_locale(),
            "Localizer initialized"
        );
        Ok(Self::new(catalogs).with_default_error_message(config.errors.default_message.clone()))
    }

    /// Override the message used for default error payloads
    #[must_use]
    pub fn with_default_error_message(mut self, message: impl Into<String>) -> Self {
        self.default_error_message = message.into();
        self
    }

    /// Catalogs lookups are routed through
    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Message of payloads built without a code
    pub fn default_error_message(&self) -> &str {
        &self.default_error_message
    }

    // Direct lookups

    /// Look `key` up in the general catalog
    pub fn message(
        &self,
        ctx: &LocaleContext,
        key: &str,
        params: &[Param],
    ) -> CatalogResult<String> {
        self.message_in(ctx.locale(), key, params)
    }

    /// [`Localizer::message`] for an explicit locale
    pub fn message_in(
        &self,
        locale: &Locale,
        key: &str,
        params: &[Param],
    ) -> CatalogResult<String> {
        self.catalogs.general().lookup(key, params, locale)
    }

    /// Look `key` up in the response catalog
    pub fn response_message(
        &self,
        ctx: &LocaleContext,
        key: &str,
        params: &[Param],
    ) -> CatalogResult<String> {
        self.response_message_in(ctx.locale(), key, params)
    }

    /// [`Localizer::response_message`] for an explicit locale
    pub fn response_message_in(
        &self,
        locale: &Locale,
        key: &str,
        params: &[Param],
    ) -> CatalogResult<String> {
        self.catalogs.response().lookup(key, params, locale)
    }

    /// Look `key` up in the error catalog
    pub fn error_message(
        &self,
        ctx: &LocaleContext,
        key: &str,
        params: &[Param],
    ) -> CatalogResult<String> {
        self.error_message_in(ctx.locale(), key, params)
    }

    /// [`Localizer::error_message`] for an explicit locale
    pub fn error_message_in(
        &self,
        locale: &Locale,
        key: &str,
        params: &[Param],
    ) -> CatalogResult<String> {
        self.catalogs.error().lookup(key, params, locale)
    }

    // Entity resolution

    /// Fill the entity's message from its own code.
    ///
    /// Entities without a code come back untouched.
    pub fn resolve<E: Localizable>(&self, ctx: &LocaleContext, entity: E) -> CatalogResult<E> {
        self.resolve_in(ctx.locale(), entity)
    }

    /// [`Localizer::resolve`] for an explicit locale
    #[instrument(level = "debug", skip(self, entity), fields(locale = %locale))]
    pub fn resolve_in<E: Localizable>(
        &self,
        locale: &Locale,
        mut entity: E,
    ) -> CatalogResult<E> {
        let Some(code) = present(entity.message_code()) else {
            debug!("Entity has no message code, leaving it unchanged");
            return Ok(entity);
        };

        let message = self
            .catalogs
            .for_kind(entity.kind())
            .lookup(code, entity.params(), locale)?;
        entity.set_message(message);
        Ok(entity)
    }

    /// Fill the entity's message from a caller-supplied code and the entity's params
    pub fn resolve_with_code<E: Localizable>(
        &self,
        ctx: &LocaleContext,
        entity: E,
        code: Option<&str>,
    ) -> CatalogResult<E> {
        self.resolve_with_code_in(ctx.locale(), entity, code)
    }

    /// [`Localizer::resolve_with_code`] for an explicit locale
    #[instrument(level = "debug", skip(self, entity), fields(locale = %locale))]
    pub fn resolve_with_code_in<E: Localizable>(
        &self,
        locale: &Locale,
        mut entity: E,
        code: Option<&str>,
    ) -> CatalogResult<E> {
        let Some(code) = present(code) else {
            return Ok(entity);
        };

        let message = self
            .catalogs
            .for_kind(entity.kind())
            .lookup(code, entity.params(), locale)?;
        entity.set_message(message);
        Ok(entity)
    }

    /// [`Localizer::resolve`] over an entity that may be absent
    pub fn resolve_optional<E: Localizable>(
        &self,
        ctx: &LocaleContext,
        entity: Option<E>,
    ) -> CatalogResult<Option<E>> {
        self.resolve_optional_in(ctx.locale(), entity)
    }

    /// [`Localizer::resolve_optional`] for an explicit locale
    pub fn resolve_optional_in<E: Localizable>(
        &self,
        locale: &Locale,
        entity: Option<E>,
    ) -> CatalogResult<Option<E>> {
        entity.map(|entity| self.resolve_in(locale, entity)).transpose()
    }

    /// Resolve a bare code against the response catalog
    pub fn resolve_by_code(
        &self,
        ctx: &LocaleContext,
        code: Option<&str>,
    ) -> CatalogResult<Option<String>> {
        self.resolve_by_code_in(ctx.locale(), code)
    }

    /// [`Localizer::resolve_by_code`] for an explicit locale
    pub fn resolve_by_code_in(
        &self,
        locale: &Locale,
        code: Option<&str>,
    ) -> CatalogResult<Option<String>> {
        present(code)
            .map(|code| {
                self.catalogs
                    .for_kind(EntityKind::Response)
                    .lookup(code, &[], locale)
            })
            .transpose()
    }

    /// Defer production of an entity; the context's locale is captured now
    pub fn resolve_deferred<E, F>(
        &self,
        ctx: &LocaleContext,
        supplier: F,
    ) -> Deferred<'_, E, F>
    where
        E: Localizable,
        F: FnOnce() -> Option<E>,
    {
        self.resolve_deferred_in(ctx.locale(), supplier)
    }

    /// [`Localizer::resolve_deferred`] capturing an explicit locale
    pub fn resolve_deferred_in<E, F>(
        &self,
        locale: &Locale,
        supplier: F,
    ) -> Deferred<'_, E, F>
    where
        E: Localizable,
        F: FnOnce() -> Option<E>,
    {
        Deferred::new(self, locale.clone(), supplier)
    }

    // Error payloads

    /// Payload for a failed request built from `entity`.
    ///
    /// The message always comes from the error catalog. Without a code the
    /// default payload is returned.
    pub fn error_response<E: Localizable>(
        &self,
        ctx: &LocaleContext,
        entity: &E,
        status: StatusCode,
    ) -> CatalogResult<ErrorResponse> {
        self.error_response_in(ctx.locale(), entity, status)
    }

    /// [`Localizer::error_response`] for an explicit locale
    #[instrument(
        level = "debug",
        skip(self, entity),
        fields(locale = %locale, status = status.as_u16())
    )]
    pub fn error_response_in<E: Localizable>(
        &self,
        locale: &Locale,
        entity: &E,
        status: StatusCode,
    ) -> CatalogResult<ErrorResponse> {
        let Some(code) = present(entity.message_code()) else {
            debug!("No message code, using default error payload");
            return Ok(self.default_error_response());
        };

        let message = self.catalogs.error().lookup(code, entity.params(), locale)?;
        Ok(ErrorResponse::from_parts(
            message,
            status,
            entity.details().cloned().unwrap_or_default(),
            entity.field_errors().to_vec(),
        ))
    }

    /// [`Localizer::error_response`] when there may be no entity at all
    pub fn error_response_optional<E: Localizable>(
        &self,
        ctx: &LocaleContext,
        entity: Option<&E>,
        status: StatusCode,
    ) -> CatalogResult<ErrorResponse> {
        self.error_response_optional_in(ctx.locale(), entity, status)
    }

    /// [`Localizer::error_response_optional`] for an explicit locale
    pub fn error_response_optional_in<E: Localizable>(
        &self,
        locale: &Locale,
        entity: Option<&E>,
        status: StatusCode,
    ) -> CatalogResult<ErrorResponse> {
        match entity {
            Some(entity) => self.error_response_in(locale, entity, status),
            None => Ok(self.default_error_response()),
        }
    }

    /// Payload from a bare code looked up in the error catalog
    pub fn error_response_for_code(
        &self,
        ctx: &LocaleContext,
        code: Option<&str>,
        params: &[Param],
        status: StatusCode,
    ) -> CatalogResult<ErrorResponse> {
        self.error_response_for_code_in(ctx.locale(), code, params, status)
    }

    /// [`Localizer::error_response_for_code`] for an explicit locale
    #[instrument(
        level = "debug",
        skip(self, params),
        fields(locale = %locale, status = status.as_u16())
    )]
    pub fn error_response_for_code_in(
        &self,
        locale: &Locale,
        code: Option<&str>,
        params: &[Param],
        status: StatusCode,
    ) -> CatalogResult<ErrorResponse> {
        match present(code) {
            Some(code) => {
                let message = self.catalogs.error().lookup(code, params, locale)?;
                Ok(ErrorResponse::of(message, status, Default::default()))
            }
            None => Ok(self.default_error_response()),
        }
    }

    fn default_error_response(&self) -> ErrorResponse {
        ErrorResponse::generic_with(self.default_error_message.as_str())
    }
}
