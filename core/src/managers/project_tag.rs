//! Project tags and the entities they are attached to.
//!
//! Tags have no id of their own; item routes use `{projectId},{name}`.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{composite_key, CREATED, NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{
    DataResponse, Ip, ListResponse, Project, ProjectTag, ProjectTagForm, ProjectTagUpdateForm,
    ProjectTaggable,
};

/// Project tags, addressed as `{projectId},{name}`.
#[derive(Debug, Clone, Copy)]
pub struct ProjectTagManager<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectTagManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<ProjectTag>> {
        let url = self.client.url(&["api", "projectTag"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn create(&self, form: &ProjectTagForm) -> Result<DataResponse<ProjectTag>> {
        let url = self.client.url(&["api", "projectTag"], &[]);
        let request = HttpRequest::form(HttpMethod::Post, url, &form.to_form());
        self.client.send(request, CREATED)
    }

    pub fn get(&self, project_id: Uuid, name: &str) -> Result<DataResponse<ProjectTag>> {
        let url = self.item_url(project_id, name, None, &[]);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(
        &self,
        project_id: Uuid,
        name: &str,
        form: &ProjectTagUpdateForm,
    ) -> Result<DataResponse<ProjectTag>> {
        let url = self.item_url(project_id, name, None, &[]);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, project_id: Uuid, name: &str) -> Result<()> {
        let url = self.item_url(project_id, name, None, &[]);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    /// `GET /api/projectTag/{projectId},{name}/projectTaggable`
    pub fn project_taggables(
        &self,
        project_id: Uuid,
        name: &str,
        params: &ListParams,
    ) -> Result<ListResponse<ProjectTaggable>> {
        let url = self.item_url(project_id, name, Some("projectTaggable"), &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    /// `GET /api/projectTag/{projectId},{name}/ip`
    pub fn ips(
        &self,
        project_id: Uuid,
        name: &str,
        ip_version: Option<&str>,
        params: &ListParams,
    ) -> Result<ListResponse<Ip>> {
        let query = params.query(ip_version.map(|version| ("ip_version", version)));
        let url = self.item_url(project_id, name, Some("ip"), &query);
        self.client.send(HttpRequest::get(url), OK)
    }

    /// `GET /api/projectTag/{projectId},{name}/project`
    pub fn projects(
        &self,
        project_id: Uuid,
        name: &str,
        params: &ListParams,
    ) -> Result<ListResponse<Project>> {
        let url = self.item_url(project_id, name, Some("project"), &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    fn item_url(
        &self,
        project_id: Uuid,
        name: &str,
        relation: Option<&str>,
        query: &[(&'static str, String)],
    ) -> String {
        let key = composite_key(project_id, name);
        match relation {
            Some(relation) => self.client.url(&["api", "projectTag", &key, relation], query),
            None => self.client.url(&["api", "projectTag", &key], query),
        }
    }
}
