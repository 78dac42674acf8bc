//! Client error taxonomy.
//!
//! Every fallible operation in FacultyHub returns [`ClientError`]. The variants
//! follow how failures surface to the user:
//!
//! - fetch failures ([`ClientError::Transport`], 5xx [`ClientError::Server`]) are shown as
//!   a dismissible inline banner and leave navigation state intact
//! - rejected submissions (4xx [`ClientError::Server`]) carry the backend's own message,
//!   which is surfaced verbatim
//! - [`ClientError::Validation`] and [`ClientError::Incomplete`] never reach the backend

use serde_json::Value;
use validator::ValidationErrorsKind;

use crate::messages::{self, Operation};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server rejected request ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },

    #[error("Session is missing or expired")]
    Unauthorized,

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Form is incomplete: {0}")]
    Incomplete(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ClientError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Builds a server error from a raw response body, pulling the message out of
    /// the `error` or `detail` field when the body is JSON.
    pub fn from_body(status: u16, body: &str) -> Self {
        Self::server(status, extract_message(body))
    }

    pub fn incomplete(reason: impl Into<String>) -> Self {
        Self::Incomplete(reason.into())
    }

    /// Whether re-issuing the same request can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The text shown to the end user for a failure of `operation`.
    ///
    /// Backend messages win; otherwise a localized fallback for the operation is used.
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Unauthorized => messages::SESSION_EXPIRED.to_string(),
            Self::Incomplete(reason) => reason.clone(),
            Self::Validation(errors) => first_validation_message(errors)
                .unwrap_or_else(|| operation.fallback_message().to_string()),
            _ => operation.fallback_message().to_string(),
        }
    }
}

/// Extracts the human-readable message from an error response body.
///
/// Looks at `error` first, then `detail`. Non-string values are rendered as JSON.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let field = value.get("error").or_else(|| value.get("detail"))?;

    match field {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn first_validation_message(errors: &validator::ValidationErrors) -> Option<String> {
    errors.errors().values().find_map(|kind| match kind {
        ValidationErrorsKind::Field(errs) => errs
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string())),
        ValidationErrorsKind::Struct(nested) => first_validation_message(nested),
        ValidationErrorsKind::List(items) => items.values().find_map(|n| first_validation_message(n)),
    })
}
