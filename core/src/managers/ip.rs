//! Tracked addresses.
//!
//! An ip is identified by its project and address together, so item routes
//! take `{projectId},{ip}`. The address is percent-encoded as part of that
//! single segment, which keeps IPv6 colons intact.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{composite_key, CREATED, NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, Ip, IpForm, IpLog, ListResponse, ProjectTag};

/// Addresses tracked per project, addressed as `{projectId},{ip}`.
#[derive(Debug, Clone, Copy)]
pub struct IpManager<'a> {
    client: &'a ApiClient,
}

impl<'a> IpManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    /// `GET /api/ip`, optionally filtered by `ip_version`.
    pub fn all(&self, ip_version: Option<&str>, params: &ListParams) -> Result<ListResponse<Ip>> {
        let query = params.query(ip_version.map(|version| ("ip_version", version)));
        let url = self.client.url(&["api", "ip"], &query);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn create(&self, form: &IpForm) -> Result<DataResponse<Ip>> {
        let url = self.client.url(&["api", "ip"], &[]);
        let request = HttpRequest::form(HttpMethod::Post, url, &form.to_form());
        self.client.send(request, CREATED)
    }

    pub fn get(&self, project_id: Uuid, ip: &str) -> Result<DataResponse<Ip>> {
        let url = self.item_url(project_id, ip, None, &[]);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(&self, project_id: Uuid, ip: &str, form: &IpForm) -> Result<DataResponse<Ip>> {
        let url = self.item_url(project_id, ip, None, &[]);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, project_id: Uuid, ip: &str) -> Result<()> {
        let url = self.item_url(project_id, ip, None, &[]);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    /// `GET /api/ip/{projectId},{ip}/ipLog`
    pub fn ip_logs(&self, project_id: Uuid, ip: &str, params: &ListParams) -> Result<ListResponse<IpLog>> {
        let url = self.item_url(project_id, ip, Some("ipLog"), &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    /// `GET /api/ip/{projectId},{ip}/assignedProjectTag`
    pub fn assigned_project_tags(
        &self,
        project_id: Uuid,
        ip: &str,
        params: &ListParams,
    ) -> Result<ListResponse<ProjectTag>> {
        let url = self.item_url(project_id, ip, Some("assignedProjectTag"), &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    fn item_url(
        &self,
        project_id: Uuid,
        ip: &str,
        relation: Option<&str>,
        query: &[(&'static str, String)],
    ) -> String {
        let key = composite_key(project_id, ip);
        match relation {
            Some(relation) => self.client.url(&["api", "ip", &key, relation], query),
            None => self.client.url(&["api", "ip", &key], query),
        }
    }
}
