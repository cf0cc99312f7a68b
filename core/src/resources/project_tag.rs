//! Project tags.
//!
//! Creating and updating take different forms: create names the tag, update
//! names the ip it applies to.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::{Form, ListParams};
use crate::resources::{DataResponse, Ip, ListResponse, Project, ProjectTaggable};

/// A named, colored tag scoped to a project, keyed by `(project_id, name)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectTag {
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub ip_status_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ProjectTag {
    pub fn update(
        &self,
        client: &ApiClient,
        form: &ProjectTagUpdateForm,
    ) -> Result<DataResponse<ProjectTag>> {
        client.project_tags().update(self.project_id, &self.name, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.project_tags().delete(self.project_id, &self.name)
    }

    pub fn project_taggables(
        &self,
        client: &ApiClient,
        params: &ListParams,
    ) -> Result<ListResponse<ProjectTaggable>> {
        client
            .project_tags()
            .project_taggables(self.project_id, &self.name, params)
    }

    pub fn ips(
        &self,
        client: &ApiClient,
        ip_version: Option<&str>,
        params: &ListParams,
    ) -> Result<ListResponse<Ip>> {
        client
            .project_tags()
            .ips(self.project_id, &self.name, ip_version, params)
    }

    pub fn projects(&self, client: &ApiClient, params: &ListParams) -> Result<ListResponse<Project>> {
        client.project_tags().projects(self.project_id, &self.name, params)
    }
}

/// Input for `POST /api/projectTag`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTagForm {
    pub project_id: Uuid,
    pub name: String,
    pub color: Option<String>,
}

impl ProjectTagForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("project_id", self.project_id)
            .field("name", &self.name)
            .optional("color", self.color.as_deref())
    }
}

/// Input for `PATCH /api/projectTag/{projectId},{name}`.
///
/// The update route takes `ip` where create takes `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTagUpdateForm {
    pub project_id: Uuid,
    pub ip: String,
    pub color: Option<String>,
}

impl ProjectTagUpdateForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("project_id", self.project_id)
            .field("ip", &self.ip)
            .optional("color", self.color.as_deref())
    }
}
