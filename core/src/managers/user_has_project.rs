//! Project memberships, keyed by `{userId},{projectId}`.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{composite_key, CREATED, NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, ListResponse, UserHasProject, UserHasProjectForm};

/// Project memberships, addressed as `{userId},{projectId}`.
#[derive(Debug, Clone, Copy)]
pub struct UserHasProjectManager<'a> {
    client: &'a ApiClient,
}

impl<'a> UserHasProjectManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<UserHasProject>> {
        let url = self.client.url(&["api", "userHasProject"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn create(&self, form: &UserHasProjectForm) -> Result<DataResponse<UserHasProject>> {
        let url = self.client.url(&["api", "userHasProject"], &[]);
        let request = HttpRequest::form(HttpMethod::Post, url, &form.to_form());
        self.client.send(request, CREATED)
    }

    /// Fetch one membership. `include` may name `user`, `project` or both
    /// (`"user,project"`) to embed them in the response.
    pub fn get(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        include: Option<&str>,
    ) -> Result<DataResponse<UserHasProject>> {
        let query: Vec<_> = include
            .map(|include| ("include", include.to_string()))
            .into_iter()
            .collect();
        let url = self.item_url(user_id, project_id, &query);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        form: &UserHasProjectForm,
    ) -> Result<DataResponse<UserHasProject>> {
        let url = self.item_url(user_id, project_id, &[]);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, user_id: Uuid, project_id: Uuid) -> Result<()> {
        let url = self.item_url(user_id, project_id, &[]);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    fn item_url(&self, user_id: Uuid, project_id: Uuid, query: &[(&'static str, String)]) -> String {
        let key = composite_key(user_id, project_id);
        self.client.url(&["api", "userHasProject", &key], query)
    }
}
