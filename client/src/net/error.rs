//! Client-side error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified only by transport outcome and HTTP status. The
//! backend message is pulled from `detail`, `message`, or `error` (in that
//! order) so toasts and inline form errors can show what the server said.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("request timed out")]
    Timeout,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 => Self::Unauthorized(message.unwrap_or_else(|| "Please sign in again.".to_owned())),
            403 => Self::Forbidden(
                message.unwrap_or_else(|| "You do not have permission to do that.".to_owned()),
            ),
            404 => Self::NotFound(message.unwrap_or_else(|| "Not found.".to_owned())),
            _ => Self::Api {
                status,
                message: message.unwrap_or_else(|| default_message(status).to_owned()),
            },
        }
    }

    /// HTTP status, when the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Connection(_) | Self::Timeout | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) | Self::Timeout => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Unauthorized(_) | Self::Forbidden(_) | Self::NotFound(_) | Self::Decode(_) => false,
        }
    }

    /// Text for toasts and inline form messages.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Timeout => "The server took too long to respond.".to_owned(),
            Self::Unauthorized(msg) | Self::Forbidden(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Api { message, .. } => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "The request was invalid.",
        409 => "That conflicts with existing data.",
        422 => "Some fields are invalid.",
        500..=599 => "The server had a problem. Try again shortly.",
        _ => "Something went wrong.",
    }
}

/// Pull a human-readable message out of a backend error body.
///
/// `detail` may be a string or a list of validation objects with `msg`
/// fields; both shapes are supported.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(message_from_value))
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(_) => item.get("msg").and_then(Value::as_str).map(str::to_owned),
                    _ => None,
                })
                .collect();
            if parts.is_empty() { None } else { Some(parts.join("; ")) }
        }
        Value::Object(_) => value.get("message").and_then(message_from_value),
        _ => None,
    }
}
