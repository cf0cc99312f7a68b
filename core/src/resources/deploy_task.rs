//! Deploy tasks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::ListParams;
use crate::resources::{ListResponse, ServerLog};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployTask {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub status: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl DeployTask {
    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.deploy_tasks().delete(self.id)
    }

    pub fn server_logs(&self, client: &ApiClient, params: &ListParams) -> Result<ListResponse<ServerLog>> {
        client.deploy_tasks().server_logs(self.id, params)
    }
}
