//! Localizable response and exception entities

use msgloc_catalog::Param;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Free-form detail mapping attached to an entity or error payload.
pub type Details = serde_json::Map<String, Value>;

/// One field-level validation problem, e.g. `{"field": "email", "message": "..."}`.
pub type FieldError = serde_json::Map<String, Value>;

/// Which catalog partition serves an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Outbound success payload
    Response,
    /// Raised on the failure path
    Error,
}

/// Anything that carries a message code and a fillable message.
///
/// A code that is absent or empty means there is nothing to resolve.
pub trait Localizable {
    /// Catalog partition this entity belongs to
    fn kind(&self) -> EntityKind;

    /// Code to look up
    fn message_code(&self) -> Option<&str>;

    /// Positional substitution params
    fn params(&self) -> &[Param] {
        &[]
    }

    /// Extra details to carry into an error payload
    fn details(&self) -> Option<&Details> {
        None
    }

    /// Field-level errors to carry into an error payload
    fn field_errors(&self) -> &[FieldError] {
        &[]
    }

    /// The resolved message, if resolution already happened
    fn message(&self) -> Option<&str>;

    /// Store the resolved message
    fn set_message(&mut self, message: String);
}

impl<E: Localizable + ?Sized> Localizable for &mut E {
    fn kind(&self) -> EntityKind {
        (**self).kind()
    }

    fn message_code(&self) -> Option<&str> {
        (**self).message_code()
    }

    fn params(&self) -> &[Param] {
        (**self).params()
    }

    fn details(&self) -> Option<&Details> {
        (**self).details()
    }

    fn field_errors(&self) -> &[FieldError] {
        (**self).field_errors()
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }

    fn set_message(&mut self, message: String) {
        (**self).set_message(message);
    }
}

impl<E: Localizable + ?Sized> Localizable for Box<E> {
    fn kind(&self) -> EntityKind {
        (**self).kind()
    }

    fn message_code(&self) -> Option<&str> {
        (**self).message_code()
    }

    fn params(&self) -> &[Param] {
        (**self).params()
    }

    fn details(&self) -> Option<&Details> {
        (**self).details()
    }

    fn field_errors(&self) -> &[FieldError] {
        (**self).field_errors()
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }

    fn set_message(&mut self, message: String) {
        (**self).set_message(message);
    }
}

/// Outbound success payload with an optional body.
///
/// Only `message`, `details` and `data` are serialized; the code and params
/// stay server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T = ()> {
    #[serde(skip)]
    message_code: Option<String>,
    #[serde(skip)]
    params: Vec<Param>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Details>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl ApiResponse {
    /// Response without a body
    pub fn new(code: impl Into<String>) -> Self {
        Self::coded(Some(code.into()), None)
    }
}

impl<T> ApiResponse<T> {
    fn coded(message_code: Option<String>, data: Option<T>) -> Self {
        Self {
            message_code,
            params: Vec::new(),
            message: None,
            details: None,
            data,
        }
    }

    /// Response carrying `data`
    pub fn with_data(code: impl Into<String>, data: T) -> Self {
        Self::coded(Some(code.into()), Some(data))
    }

    /// Response with no message code; resolution leaves it untouched
    pub fn uncoded(data: Option<T>) -> Self {
        Self::coded(None, data)
    }

    /// Replace the params
    #[must_use]
    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = params;
        self
    }

    /// Append one param
    #[must_use]
    pub fn with_param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Attach details
    #[must_use]
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    /// The body, if any
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the response and return the body
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self::coded(None, None)
    }
}

impl<T> Localizable for ApiResponse<T> {
    fn kind(&self) -> EntityKind {
        EntityKind::Response
    }

    fn message_code(&self) -> Option<&str> {
        self.message_code.as_deref()
    }

    fn params(&self) -> &[Param] {
        &self.params
    }

    fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }
}

/// Error raised on the failure path, localized before it reaches the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiException {
    message_code: Option<String>,
    params: Vec<Param>,
    details: Details,
    field_errors: Vec<FieldError>,
    message: Option<String>,
}

impl ApiException {
    /// Exception identified by `code`
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            message_code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Exception with no message code
    pub fn uncoded() -> Self {
        Self::default()
    }

    /// Replace the params
    #[must_use]
    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = params;
        self
    }

    /// Append one param
    #[must_use]
    pub fn with_param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Insert one detail entry
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Replace the details
    #[must_use]
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }

    /// Append a field error built from a field name and a message
    #[must_use]
    pub fn with_field_error(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut entry = FieldError::new();
        entry.insert("field".to_string(), Value::String(field.into()));
        entry.insert("message".to_string(), Value::String(message.into()));
        self.field_errors.push(entry);
        self
    }

    /// Replace the field errors
    #[must_use]
    pub fn with_field_errors(mut self, field_errors: Vec<FieldError>) -> Self {
        self.field_errors = field_errors;
        self
    }
}

impl Localizable for ApiException {
    fn kind(&self) -> EntityKind {
        EntityKind::Error
    }

    fn message_code(&self) -> Option<&str> {
        self.message_code.as_deref()
    }

    fn params(&self) -> &[Param] {
        &self.params
    }

    fn details(&self) -> Option<&Details> {
        Some(&self.details)
    }

    fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }
}

impl fmt::Display for ApiException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.message_code) {
            (Some(message), _) => f.write_str(message),
            (None, Some(code)) => write!(f, "unlocalized error '{code}'"),
            (None, None) => f.write_str("unlocalized error"),
        }
    }
}

impl std::error::Error for ApiException {}
