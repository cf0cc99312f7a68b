//! Tag attachments, `/api/projectTaggable`.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{CREATED, NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, ListResponse, ProjectTaggable, ProjectTaggableForm};

#[derive(Debug, Clone, Copy)]
pub struct ProjectTaggableManager<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectTaggableManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<ProjectTaggable>> {
        let url = self.client.url(&["api", "projectTaggable"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn create(&self, form: &ProjectTaggableForm) -> Result<DataResponse<ProjectTaggable>> {
        let url = self.client.url(&["api", "projectTaggable"], &[]);
        let request = HttpRequest::form(HttpMethod::Post, url, &form.to_form());
        self.client.send(request, CREATED)
    }

    pub fn get(&self, project_taggable_id: Uuid) -> Result<DataResponse<ProjectTaggable>> {
        let url = self.item_url(project_taggable_id);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(
        &self,
        project_taggable_id: Uuid,
        form: &ProjectTaggableForm,
    ) -> Result<DataResponse<ProjectTaggable>> {
        let url = self.item_url(project_taggable_id);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, project_taggable_id: Uuid) -> Result<()> {
        let url = self.item_url(project_taggable_id);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    fn item_url(&self, project_taggable_id: Uuid) -> String {
        self.client
            .url(&["api", "projectTaggable", &project_taggable_id.to_string()], &[])
    }
}
