//! Servers and their create/update form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::{Form, ListParams};
use crate::resources::{DataResponse, ListResponse, ServerLog};

/// A deployment target belonging to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Server {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub name: String,
    pub ip: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub login: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub position: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Server {
    pub fn update(&self, client: &ApiClient, form: &ServerForm) -> Result<DataResponse<Server>> {
        client.servers().update(self.id, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.servers().delete(self.id)
    }

    pub fn server_logs(&self, client: &ApiClient, params: &ListParams) -> Result<ListResponse<ServerLog>> {
        client.servers().server_logs(self.id, params)
    }
}

/// Input for creating or updating a server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerForm {
    pub project_id: Uuid,
    pub name: String,
    pub ip: String,
    pub login: String,
    pub enabled: bool,
    pub port: Option<u16>,
    pub position: Option<i64>,
}

impl ServerForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("project_id", self.project_id)
            .field("name", &self.name)
            .field("ip", &self.ip)
            .field("login", &self.login)
            .flag("enabled", self.enabled)
            .optional("port", self.port)
            .optional("position", self.position)
    }
}
