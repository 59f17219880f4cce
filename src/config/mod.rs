//! Configuration module for the admin client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Path the server sends expired sessions to when no refresh URL is configured.
const DEFAULT_REFRESH_PATH: &str = "/tb-ui/app/login-redirect";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme, host and context path of the blog server
    pub base_url: String,
    /// Weblog whose membership is managed
    pub weblog_id: Option<String>,
    /// Where to send the user once the session has expired
    pub refresh_url: String,
    /// Session cookie value attached to every request
    pub session_cookie: Option<String>,
    /// Dialog button labels
    pub labels: Labels,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Localized labels for the confirmation dialog buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub confirm: String,
    pub cancel: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            confirm: "Confirm".to_string(),
            cancel: "Cancel".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("TB_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let weblog_id = env::var("TB_WEBLOG_ID").ok().filter(|id| !id.is_empty());

        let refresh_url = env::var("TB_REFRESH_URL")
            .unwrap_or_else(|_| format!("{}{}", base_url, DEFAULT_REFRESH_PATH));

        let session_cookie = env::var("TB_SESSION_COOKIE").ok().filter(|c| !c.is_empty());

        let defaults = Labels::default();
        let labels = Labels {
            confirm: env::var("TB_CONFIRM_LABEL").unwrap_or(defaults.confirm),
            cancel: env::var("TB_CANCEL_LABEL").unwrap_or(defaults.cancel),
        };

        let log_level = env::var("TB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            base_url,
            weblog_id,
            refresh_url,
            session_cookie,
            labels,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("TB_BASE_URL");
        env::remove_var("TB_WEBLOG_ID");
        env::remove_var("TB_REFRESH_URL");
        env::remove_var("TB_SESSION_COOKIE");
        env::remove_var("TB_CONFIRM_LABEL");
        env::remove_var("TB_CANCEL_LABEL");
        env::remove_var("TB_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.weblog_id.is_none());
        assert_eq!(
            config.refresh_url,
            "http://localhost:8080/tb-ui/app/login-redirect"
        );
        assert!(config.session_cookie.is_none());
        assert_eq!(config.labels, Labels::default());
        assert_eq!(config.log_level, "info");
    }
}
