//! Localized ip status descriptions.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::Form;
use crate::resources::DataResponse;

/// Localized description of an ip status, keyed by `(ip_status_id, i18n_lang_id)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpStatusVersion {
    pub ip_status_id: String,
    pub i18n_lang_id: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl IpStatusVersion {
    pub fn update(
        &self,
        client: &ApiClient,
        form: &IpStatusVersionForm,
    ) -> Result<DataResponse<IpStatusVersion>> {
        client
            .ip_status_versions()
            .update(&self.ip_status_id, &self.i18n_lang_id, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client
            .ip_status_versions()
            .delete(&self.ip_status_id, &self.i18n_lang_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpStatusVersionForm {
    pub ip_status_id: String,
    pub i18n_lang_id: String,
    pub description: String,
}

impl IpStatusVersionForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("ip_status_id", &self.ip_status_id)
            .field("i18n_lang_id", &self.i18n_lang_id)
            .field("description", &self.description)
    }
}
