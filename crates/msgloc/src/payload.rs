//! Structured error payloads

use crate::entity::{Details, FieldError};
use chrono::{DateTime, Utc};
use http::StatusCode;
use msgloc_config::DEFAULT_ERROR_MESSAGE;
use serde::Serialize;

/// Error body handed back to API callers.
///
/// Built fresh per failure and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    field_errors: Vec<FieldError>,
    details: Details,
}

impl ErrorResponse {
    /// Payload with a status, its reason phrase and the given details
    pub fn of(message: impl Into<String>, status: StatusCode, details: Details) -> Self {
        Self::from_parts(message.into(), status, details, Vec::new())
    }

    /// Payload with a status, its reason phrase and per-field errors
    pub fn with_field_errors(
        message: impl Into<String>,
        status: StatusCode,
        field_errors: Vec<FieldError>,
    ) -> Self {
        Self::from_parts(message.into(), status, Details::new(), field_errors)
    }

    /// Default payload: generic message and the current time only
    pub fn generic() -> Self {
        Self::generic_with(DEFAULT_ERROR_MESSAGE)
    }

    /// Default payload with a custom generic message
    pub fn generic_with(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reason: None,
            status: None,
            timestamp: Utc::now(),
            field_errors: Vec::new(),
            details: Details::new(),
        }
    }

    pub(crate) fn from_parts(
        message: String,
        status: StatusCode,
        details: Details,
        field_errors: Vec<FieldError>,
    ) -> Self {
        Self {
            message,
            reason: status.canonical_reason().map(str::to_owned),
            status: Some(status.as_u16()),
            timestamp: Utc::now(),
            field_errors,
            details,
        }
    }

    /// Localized or generic message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Canonical reason phrase of the status
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Numeric HTTP status, absent on the default payload
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// When the payload was built
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Details copied from the failing entity
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Field-level errors copied from the failing entity
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }
}
