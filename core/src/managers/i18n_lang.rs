//! Languages, keyed by their code. Only the description can be changed.

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{NO_CONTENT, OK};
use crate::params::{Form, ListParams};
use crate::resources::{DataResponse, I18nLang, ListResponse};

#[derive(Debug, Clone, Copy)]
pub struct I18nLangManager<'a> {
    client: &'a ApiClient,
}

impl<'a> I18nLangManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<I18nLang>> {
        let url = self.client.url(&["api", "i18nLang"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn get(&self, i18n_lang_id: &str) -> Result<DataResponse<I18nLang>> {
        let url = self.client.url(&["api", "i18nLang", i18n_lang_id], &[]);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(&self, i18n_lang_id: &str, description: &str) -> Result<DataResponse<I18nLang>> {
        let url = self.client.url(&["api", "i18nLang", i18n_lang_id], &[]);
        let form = Form::new().field("description", description);
        self.client
            .send(HttpRequest::form(HttpMethod::Patch, url, &form), OK)
    }

    pub fn delete(&self, i18n_lang_id: &str) -> Result<()> {
        let url = self.client.url(&["api", "i18nLang", i18n_lang_id], &[]);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }
}
