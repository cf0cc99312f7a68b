//! The `ApiClient` façade.
//!
//! # Design
//! `ApiClient` owns the base url, the bearer token, the global headers and a
//! shared `Transport`. It is cheap to clone. Managers borrow it and do
//! nothing but build an `HttpRequest`, hand it to `send`/`send_empty` with
//! the one status code the operation expects, and return the decoded body.
//! Status interpretation lives in `check_status`/`parse_response`, which are
//! pure functions over `HttpResponse`.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::managers::{
    DeployTaskManager, I18nLangManager, IpLogManager, IpManager, IpStatusVersionManager,
    MeManager, ProjectTagManager, ProjectTaggableManager, ServerLogManager, ServerManager,
    UserHasProjectManager, UserManager,
};

/// Blocking client for the ems-shield API.
///
/// # Example
/// ```no_run
/// use ems_shield::{ApiClient, ListParams};
///
/// # fn main() -> ems_shield::Result<()> {
/// let client = ApiClient::new("my-token", "https://ems-shield.ryan.ems-dev.net")?;
/// let me = client.me().user()?;
/// let servers = client.servers().all(&ListParams::new().limit(20))?;
/// println!("{} owns {} servers", me.data.name, servers.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    bearer_token: String,
    global_headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client with the default transport.
    pub fn new(bearer_token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        ClientConfig::new(bearer_token).base_url(base_url).build()
    }

    /// Create a client against the default host.
    pub fn with_token(bearer_token: impl Into<String>) -> Result<Self> {
        Self::new(bearer_token, DEFAULT_BASE_URL)
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrlCannotBeABase(config.base_url));
        }
        Ok(Self {
            base_url,
            bearer_token: config.bearer_token,
            global_headers: config.global_headers,
            transport,
        })
    }

    /// Base url without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn global_headers(&self) -> &[(String, String)] {
        &self.global_headers
    }

    /// The transport every request goes through.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn me(&self) -> MeManager<'_> {
        MeManager::new(self)
    }

    pub fn users(&self) -> UserManager<'_> {
        UserManager::new(self)
    }

    pub fn ips(&self) -> IpManager<'_> {
        IpManager::new(self)
    }

    pub fn ip_logs(&self) -> IpLogManager<'_> {
        IpLogManager::new(self)
    }

    pub fn ip_status_versions(&self) -> IpStatusVersionManager<'_> {
        IpStatusVersionManager::new(self)
    }

    pub fn i18n_langs(&self) -> I18nLangManager<'_> {
        I18nLangManager::new(self)
    }

    pub fn project_tags(&self) -> ProjectTagManager<'_> {
        ProjectTagManager::new(self)
    }

    pub fn project_taggables(&self) -> ProjectTaggableManager<'_> {
        ProjectTaggableManager::new(self)
    }

    pub fn servers(&self) -> ServerManager<'_> {
        ServerManager::new(self)
    }

    pub fn server_logs(&self) -> ServerLogManager<'_> {
        ServerLogManager::new(self)
    }

    pub fn deploy_tasks(&self) -> DeployTaskManager<'_> {
        DeployTaskManager::new(self)
    }

    pub fn user_has_projects(&self) -> UserHasProjectManager<'_> {
        UserHasProjectManager::new(self)
    }

    /// Absolute url for `segments` under the base url. Each segment is
    /// percent-encoded as a single path segment.
    pub fn url(&self, segments: &[&str], query: &[(&'static str, String)]) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        url.to_string()
    }

    /// Attach the bearer token, then the global headers.
    pub fn authorize(&self, mut request: HttpRequest) -> HttpRequest {
        request.set_header("Authorization", &format!("Bearer {}", self.bearer_token));
        for (name, value) in &self.global_headers {
            request.set_header(name, value);
        }
        request
    }

    /// Send an authorized request and return the raw response, whatever its
    /// status.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request = self.authorize(request);
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(&request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    pub(crate) fn send<T: DeserializeOwned>(&self, request: HttpRequest, expected: u16) -> Result<T> {
        let response = self.execute(request)?;
        parse_response(&response, expected)
    }

    pub(crate) fn send_empty(&self, request: HttpRequest, expected: u16) -> Result<()> {
        let response = self.execute(request)?;
        check_status(&response, expected)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url())
            .field("global_headers", &self.global_headers)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

/// Fail with `UnexpectedResponse` unless `response.status == expected`.
pub fn check_status(response: &HttpResponse, expected: u16) -> Result<()> {
    if response.status == expected {
        return Ok(());
    }
    warn!(status = response.status, expected, "unexpected response status");
    Err(ApiError::unexpected(response.status, expected, response.body.clone()))
}

/// Check the status, then decode the body as `T`.
pub fn parse_response<T: DeserializeOwned>(response: &HttpResponse, expected: u16) -> Result<T> {
    check_status(response, expected)?;
    Ok(serde_json::from_str(&response.body)?)
}
