//! Response envelope decoding and the client-side error taxonomy.
//!
//! DESIGN
//! ======
//! The backend wraps every payload as `{ success, message, data }` and reports
//! failures either as `error: "text"` or `error: [{ field, message }, ..]`.
//! Decoding happens in two steps (envelope first, payload second) so a
//! malformed `data` block is reported as [`ApiError::Decode`] instead of being
//! confused with a transport failure.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field-level validation failure reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending input field, when the backend names one.
    #[serde(default, alias = "path", alias = "param")]
    pub field: Option<String>,
    /// Human-readable description of the failure.
    #[serde(alias = "msg")]
    pub message: String,
}

/// Failure categories surfaced to the user.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend rejected one or more input fields.
    #[error("validation failed: {}", join_field_messages(.0))]
    Validation(Vec<FieldError>),
    /// The backend answered `success: false` with a single message.
    #[error("{0}")]
    Application(String),
    /// The backend answered `success: true` but `data` had an unexpected shape.
    #[error("unexpected response data: {0}")]
    Decode(String),
}

impl ApiError {
    /// Single-line description suitable for inline error banners.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Network(_) => "Unable to connect to server. Please try again.".to_owned(),
            Self::Validation(fields) => join_field_messages(fields),
            Self::Application(message) | Self::Decode(message) => message.clone(),
        }
    }
}

fn join_field_messages(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A successful envelope: the server message plus the decoded payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    error: Value,
}

/// Decode a raw HTTP response body into a typed [`Reply`].
///
/// A body that is not an envelope at all (a proxy error page, an empty reply)
/// is an [`ApiError::Network`] whatever the status; `status` is only kept in
/// its message.
///
/// # Errors
///
/// Returns the [`ApiError`] category matching the failure.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<Reply<T>, ApiError> {
    let envelope = match serde_json::from_slice::<RawEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(e) => return Err(ApiError::Network(format!("unreadable response ({status}): {e}"))),
    };
    envelope.into_reply()
}

impl RawEnvelope {
    fn into_reply<T: DeserializeOwned>(self) -> Result<Reply<T>, ApiError> {
        let message = self.message.unwrap_or_default();
        if !self.success {
            return Err(failure(self.error, message));
        }
        let data = serde_json::from_value::<T>(self.data).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Reply { message, data })
    }
}

fn failure(error: Value, message: String) -> ApiError {
    match error {
        Value::Array(items) => match serde_json::from_value::<Vec<FieldError>>(Value::Array(items)) {
            Ok(fields) if !fields.is_empty() => ApiError::Validation(fields),
            _ => fallback_failure(message),
        },
        Value::String(text) if !text.trim().is_empty() => ApiError::Application(text),
        _ => fallback_failure(message),
    }
}

fn fallback_failure(message: String) -> ApiError {
    if message.trim().is_empty() {
        ApiError::Application("request failed".to_owned())
    } else {
        ApiError::Application(message)
    }
}

/// Format the `Authorization` header value for a session token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
