//! Deploy tasks and the server logs they produced.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::HttpRequest;
use crate::managers::{NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, DeployTask, ListResponse, ServerLog};

#[derive(Debug, Clone, Copy)]
pub struct DeployTaskManager<'a> {
    client: &'a ApiClient,
}

impl<'a> DeployTaskManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<DeployTask>> {
        let url = self.client.url(&["api", "deployTask"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn get(&self, deploy_task_id: Uuid) -> Result<DataResponse<DeployTask>> {
        let id = deploy_task_id.to_string();
        let url = self.client.url(&["api", "deployTask", &id], &[]);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn delete(&self, deploy_task_id: Uuid) -> Result<()> {
        let id = deploy_task_id.to_string();
        let url = self.client.url(&["api", "deployTask", &id], &[]);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    /// `GET /api/deployTask/{deployTaskId}/serverLog`
    pub fn server_logs(
        &self,
        deploy_task_id: Uuid,
        params: &ListParams,
    ) -> Result<ListResponse<ServerLog>> {
        let id = deploy_task_id.to_string();
        let url = self
            .client
            .url(&["api", "deployTask", &id, "serverLog"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }
}
