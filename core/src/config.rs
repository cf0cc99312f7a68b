//! Client configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::http::{Transport, UreqTransport};

pub const DEFAULT_BASE_URL: &str = "https://ems-shield.ryan.ems-dev.net";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "EMS_SHIELD_TOKEN";

/// Environment variable overriding the base url.
pub const BASE_URL_ENV: &str = "EMS_SHIELD_BASE_URL";

/// Everything needed to build an `ApiClient`.
///
/// # Example
/// ```
/// use ems_shield::ClientConfig;
/// use std::time::Duration;
///
/// let client = ClientConfig::new("my-token")
///     .base_url("http://localhost:3000")
///     .header("X-Request-Source", "cron")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.base_url(), "http://localhost:3000");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    pub bearer_token: String,
    pub base_url: String,
    /// Headers sent with every request, after `Authorization`.
    pub global_headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            global_headers: Vec::new(),
            timeout: None,
        }
    }

    /// Read `EMS_SHIELD_TOKEN` and, if set, `EMS_SHIELD_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| ApiError::Config(format!("{TOKEN_ENV} is not set")))?;
        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.global_headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.global_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a client using the default blocking transport.
    pub fn build(self) -> Result<ApiClient> {
        let transport = UreqTransport::new(self.timeout);
        ApiClient::with_transport(self, Arc::new(transport))
    }

    /// Build a client on top of a caller-supplied transport.
    pub fn build_with_transport(self, transport: Arc<dyn Transport>) -> Result<ApiClient> {
        ApiClient::with_transport(self, transport)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("bearer_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("global_headers", &self.global_headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}
