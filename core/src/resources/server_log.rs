//! Server logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;

/// Output of one deploy task run on one server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerLog {
    pub id: Uuid,
    pub server_id: Uuid,
    #[serde(default)]
    pub deploy_task_id: Option<Uuid>,
    pub status: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ServerLog {
    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.server_logs().delete(self.id)
    }
}
