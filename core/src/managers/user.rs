//! `/api/user/{userId}` and the user's project and ip log lists.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, IpLog, ListResponse, Project, User, UserForm};

#[derive(Debug, Clone, Copy)]
pub struct UserManager<'a> {
    client: &'a ApiClient,
}

impl<'a> UserManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn get(&self, user_id: Uuid) -> Result<DataResponse<User>> {
        let url = self.user_url(user_id, None, &[]);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(&self, user_id: Uuid, form: &UserForm) -> Result<DataResponse<User>> {
        let url = self.user_url(user_id, None, &[]);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, user_id: Uuid) -> Result<()> {
        let url = self.user_url(user_id, None, &[]);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    /// `GET /api/user/{userId}/project`, optionally filtered by `user_role_id`.
    pub fn projects(
        &self,
        user_id: Uuid,
        user_role_id: Option<&str>,
        params: &ListParams,
    ) -> Result<ListResponse<Project>> {
        let query = params.query(user_role_id.map(|role| ("user_role_id", role)));
        let url = self.user_url(user_id, Some("project"), &query);
        self.client.send(HttpRequest::get(url), OK)
    }

    /// `GET /api/user/{userId}/ipLog`
    pub fn ip_logs(&self, user_id: Uuid, params: &ListParams) -> Result<ListResponse<IpLog>> {
        let url = self.user_url(user_id, Some("ipLog"), &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    fn user_url(
        &self,
        user_id: Uuid,
        relation: Option<&str>,
        query: &[(&'static str, String)],
    ) -> String {
        let id = user_id.to_string();
        match relation {
            Some(relation) => self.client.url(&["api", "user", &id, relation], query),
            None => self.client.url(&["api", "user", &id], query),
        }
    }
}
