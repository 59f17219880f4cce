//! Error handling module for the admin client.
//!
//! Decodes the server's status-code contract into one error type so views can branch
//! on variants instead of status literals.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const SESSION_EXPIRED: &str = "SESSION_EXPIRED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Body of a 400 response.
///
/// JSON bodies are kept as-is; plain-text bodies (a single localized message) become a
/// JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPayload(pub serde_json::Value);

impl ErrorPayload {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self(value),
            Err(_) => Self(serde_json::Value::String(body.to_string())),
        }
    }

    /// The message to show when the payload is a single string.
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(text) => f.write_str(text),
            other => write!(f, "{}", other),
        }
    }
}

/// Client error type.
#[derive(Debug)]
pub enum ClientError {
    /// HTTP 408: the login session is gone
    SessionExpired,
    /// HTTP 400 with the server's error body
    Validation(ErrorPayload),
    /// Any other non-success status
    Status { status: StatusCode, body: String },
    /// Connection or protocol failure
    Transport(String),
    /// Response body did not match the expected shape
    Decode(String),
    /// Missing or malformed configuration
    Config(String),
}

impl ClientError {
    /// Map a non-success response to its error variant.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::REQUEST_TIMEOUT => ClientError::SessionExpired,
            StatusCode::BAD_REQUEST => ClientError::Validation(ErrorPayload::from_body(&body)),
            _ => ClientError::Status { status, body },
        }
    }

    /// Get the HTTP status code behind this error, if any.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ClientError::SessionExpired => Some(StatusCode::REQUEST_TIMEOUT),
            ClientError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(_) | ClientError::Decode(_) | ClientError::Config(_) => None,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::SessionExpired => codes::SESSION_EXPIRED,
            ClientError::Validation(_) => codes::VALIDATION_ERROR,
            ClientError::Status { .. } => codes::HTTP_ERROR,
            ClientError::Transport(_) => codes::TRANSPORT_ERROR,
            ClientError::Decode(_) => codes::DECODE_ERROR,
            ClientError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::SessionExpired => "Session expired".to_string(),
            ClientError::Validation(payload) => payload.to_string(),
            ClientError::Status { status, body } if body.is_empty() => status.to_string(),
            ClientError::Status { status, body } => format!("{}: {}", status, body),
            ClientError::Transport(msg) => msg.clone(),
            ClientError::Decode(msg) => msg.clone(),
            ClientError::Config(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_decode() {
            ClientError::Decode(format!("Decode error: {}", err))
        } else {
            ClientError::Transport(format!("Transport error: {}", err))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Decode(format!("JSON error: {}", err))
    }
}
