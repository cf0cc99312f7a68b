//! Read and delete access to server logs.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::HttpRequest;
use crate::managers::{NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, ListResponse, ServerLog};

/// Server logs are written by deploy tasks; the API only lets clients read
/// and delete them.
#[derive(Debug, Clone, Copy)]
pub struct ServerLogManager<'a> {
    client: &'a ApiClient,
}

impl<'a> ServerLogManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<ServerLog>> {
        let url = self.client.url(&["api", "serverLog"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn get(&self, server_log_id: Uuid) -> Result<DataResponse<ServerLog>> {
        let url = self.item_url(server_log_id);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn delete(&self, server_log_id: Uuid) -> Result<()> {
        let url = self.item_url(server_log_id);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    fn item_url(&self, server_log_id: Uuid) -> String {
        self.client
            .url(&["api", "serverLog", &server_log_id.to_string()], &[])
    }
}
