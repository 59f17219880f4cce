//! REST API client module.
//!
//! Wraps the TightBlog admin and authoring endpoints behind typed calls.

mod members;
mod planets;

pub use members::*;
pub use planets::*;

use reqwest::{Client, Response, Url};

use crate::auth::SessionCredentials;
use crate::config::Config;
use crate::errors::ClientError;

/// Path prefix of the admin REST endpoints.
pub const ADMIN_REST: [&str; 3] = ["tb-ui", "admin", "rest"];
/// Path prefix of the authoring REST endpoints.
pub const AUTHORING_REST: [&str; 3] = ["tb-ui", "authoring", "rest"];

/// HTTP client bound to one TightBlog deployment.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    base_url: Url,
}

impl AdminClient {
    /// Create a client for the server at `base_url` (scheme, host and context path).
    pub fn new(base_url: &str, credentials: &SessionCredentials) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "Base URL {} cannot carry a path",
                base_url
            )));
        }

        let http = Client::builder()
            .default_headers(credentials.default_headers()?)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let credentials = SessionCredentials::new(config.session_cookie.clone());
        Self::new(&config.base_url, &credentials)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL below the context path. Each segment is percent-encoded.
    pub fn endpoint(&self, prefix: &[&str], tail: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Config(format!("Base URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(prefix)
            .extend(tail);
        Ok(url)
    }
}

/// Pass successful responses through; turn everything else into a `ClientError`.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    tracing::debug!("{} answered {}", url, status);
    Err(ClientError::from_status(status, body))
}
