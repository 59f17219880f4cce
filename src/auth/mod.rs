//! Session credentials for the admin REST API.
//!
//! The server authenticates admin pages with its servlet session cookie; the client replays
//! that cookie on every request.

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};

use crate::errors::ClientError;

/// Name of the servlet session cookie.
pub const SESSION_COOKIE_NAME: &str = "JSESSIONID";

/// Credentials attached to every request.
#[derive(Debug, Clone, Default)]
pub struct SessionCredentials {
    session_id: Option<String>,
}

impl SessionCredentials {
    pub fn new(session_id: Option<String>) -> Self {
        Self { session_id }
    }

    /// Anonymous credentials; protected endpoints will answer with a session expiry.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build the default headers for the HTTP client.
    pub fn default_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(session_id) = &self.session_id {
            let value = HeaderValue::from_str(&cookie_pair(session_id)).map_err(|e| {
                ClientError::Config(format!("Invalid session cookie value: {}", e))
            })?;
            headers.insert(COOKIE, value);
        }
        Ok(headers)
    }
}

fn cookie_pair(session_id: &str) -> String {
    format!("{}={}", SESSION_COOKIE_NAME, session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_cookie() {
        let headers = SessionCredentials::anonymous().default_headers().unwrap();
        assert!(headers.get(COOKIE).is_none());
    }

    #[test]
    fn test_session_cookie_header() {
        let headers = SessionCredentials::new(Some("abc123".to_string()))
            .default_headers()
            .unwrap();
        assert_eq!(headers.get(COOKIE).unwrap(), "JSESSIONID=abc123");
    }

    #[test]
    fn test_invalid_cookie_rejected() {
        let err = SessionCredentials::new(Some("bad\nvalue".to_string()))
            .default_headers()
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
