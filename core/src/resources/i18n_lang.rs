//! Languages.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;
use crate::resources::DataResponse;

/// A language the API can describe statuses in, keyed by code (`"en"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct I18nLang {
    pub id: String,
    pub description: String,
}

impl I18nLang {
    pub fn update(&self, client: &ApiClient, description: &str) -> Result<DataResponse<I18nLang>> {
        client.i18n_langs().update(&self.id, description)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.i18n_langs().delete(&self.id)
    }
}
