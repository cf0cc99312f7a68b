//! Ip log entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::Form;
use crate::resources::DataResponse;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpLog {
    pub id: Uuid,
    pub project_id: Uuid,
    pub ip: String,
    pub ip_status_id: String,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl IpLog {
    pub fn update(&self, client: &ApiClient, form: &IpLogForm) -> Result<DataResponse<IpLog>> {
        client.ip_logs().update(self.id, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.ip_logs().delete(self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpLogForm {
    pub project_id: Uuid,
    pub ip: String,
    pub ip_status_id: String,
    pub entry: Option<String>,
}

impl IpLogForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("project_id", self.project_id)
            .field("ip", &self.ip)
            .field("ip_status_id", &self.ip_status_id)
            .optional("entry", self.entry.as_deref())
    }
}
