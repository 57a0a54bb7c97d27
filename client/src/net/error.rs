//! REST failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Callers branch on the variant: `Unauthorized` has already been handled
//! globally by the HTTP client, everything else is rendered inline by the
//! screen that issued the call. Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401: missing, expired or rejected credential.
    #[error("authentication required")]
    Unauthorized,
    /// 403: authenticated but not allowed (disabled account at admin login).
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other non-2xx status, typically validation or business errors.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Pull the server's `error` (or `message`) string out of an error body.
pub fn error_body_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = || error_body_message(body).unwrap_or_else(|| format!("HTTP {status}"));
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(message()),
            404 => Self::NotFound(message()),
            _ => Self::Status { status, message: message() },
        }
    }

    /// HTTP status behind the error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Short text suitable for an inline error banner.
    pub fn display_message(&self) -> String {
        match self {
            Self::Forbidden(message) | Self::NotFound(message) | Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
