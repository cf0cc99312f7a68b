//! Per-language ip status descriptions.

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{composite_key, CREATED, NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, IpStatusVersion, IpStatusVersionForm, ListResponse};

/// Localized ip status descriptions, addressed as `{ipStatusId},{i18nLangId}`.
#[derive(Debug, Clone, Copy)]
pub struct IpStatusVersionManager<'a> {
    client: &'a ApiClient,
}

impl<'a> IpStatusVersionManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<IpStatusVersion>> {
        let url = self.client.url(&["api", "ipStatusVersion"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn create(&self, form: &IpStatusVersionForm) -> Result<DataResponse<IpStatusVersion>> {
        let url = self.client.url(&["api", "ipStatusVersion"], &[]);
        let request = HttpRequest::form(HttpMethod::Post, url, &form.to_form());
        self.client.send(request, CREATED)
    }

    pub fn get(&self, ip_status_id: &str, i18n_lang_id: &str) -> Result<DataResponse<IpStatusVersion>> {
        let url = self.item_url(ip_status_id, i18n_lang_id);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(
        &self,
        ip_status_id: &str,
        i18n_lang_id: &str,
        form: &IpStatusVersionForm,
    ) -> Result<DataResponse<IpStatusVersion>> {
        let url = self.item_url(ip_status_id, i18n_lang_id);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, ip_status_id: &str, i18n_lang_id: &str) -> Result<()> {
        let url = self.item_url(ip_status_id, i18n_lang_id);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    fn item_url(&self, ip_status_id: &str, i18n_lang_id: &str) -> String {
        let key = composite_key(ip_status_id, i18n_lang_id);
        self.client.url(&["api", "ipStatusVersion", &key], &[])
    }
}
