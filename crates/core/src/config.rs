//! Adapter configuration.

use crate::error::{VeneerError, VeneerResult};
use std::time::Duration;
use url::Url;

/// Environment variable carrying the vendor bearer token. Injected by the
/// deploying gateway; absence means anonymous (public rate-limited) access.
pub const ACCESS_TOKEN_ENV: &str = "OAUTH_ACCESS_TOKEN";

/// Configuration for one adapter process.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Fixed vendor base URL.
    pub base_url: Url,
    /// Bearer token for outbound calls, if any.
    pub access_token: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header for outbound calls.
    pub user_agent: String,
}

impl AdapterConfig {
    /// Create a configuration with defaults and no token.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            access_token: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("veneer/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Build a configuration for the given base URL, reading the bearer
    /// token from the process environment.
    pub fn from_env(base_url: &str) -> VeneerResult<Self> {
        let base_url = Url::parse(base_url)?;
        let mut config = Self::new(base_url);
        config.access_token = std::env::var(ACCESS_TOKEN_ENV).ok().filter(|t| !t.is_empty());
        Ok(config)
    }

    /// Set the bearer token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Resolve a path against the base URL.
    pub fn join(&self, path: &str) -> VeneerResult<Url> {
        // Url::join treats the base path as a directory only with a
        // trailing slash; vendor paths here are always absolute.
        self.base_url
            .join(path)
            .map_err(VeneerError::InvalidUrl)
    }
}
