//! Tracked addresses and their create/update form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::{Form, ListParams};
use crate::resources::{DataResponse, IpLog, ListResponse, ProjectTag};

/// An address tracked by a project, keyed by `(project_id, ip)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ip {
    pub project_id: Uuid,
    pub ip: String,
    pub ip_status_id: String,
    pub v6: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Ip {
    pub fn update(&self, client: &ApiClient, form: &IpForm) -> Result<DataResponse<Ip>> {
        client.ips().update(self.project_id, &self.ip, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.ips().delete(self.project_id, &self.ip)
    }

    pub fn ip_logs(&self, client: &ApiClient, params: &ListParams) -> Result<ListResponse<IpLog>> {
        client.ips().ip_logs(self.project_id, &self.ip, params)
    }

    pub fn assigned_project_tags(
        &self,
        client: &ApiClient,
        params: &ListParams,
    ) -> Result<ListResponse<ProjectTag>> {
        client.ips().assigned_project_tags(self.project_id, &self.ip, params)
    }
}

/// Input for creating or updating an ip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpForm {
    pub project_id: Uuid,
    pub ip: String,
    pub ip_status_id: String,
    pub v6: bool,
    /// Any date the server can parse, e.g. `"2026-12-31 23:59:59"` or `"+1 week"`.
    pub expires_at: Option<String>,
    pub log_entry: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl IpForm {
    pub(crate) fn to_form(&self) -> Form {
        let form = Form::new()
            .field("project_id", self.project_id)
            .field("ip", &self.ip)
            .field("ip_status_id", &self.ip_status_id)
            .flag("v6", self.v6)
            .optional("expires_at", self.expires_at.as_deref())
            .optional("log_entry", self.log_entry.as_deref());
        match &self.tags {
            Some(tags) => form.list("tags", tags),
            None => form,
        }
    }
}
