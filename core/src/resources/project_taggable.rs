//! Tag attachments.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::Form;
use crate::resources::DataResponse;

/// Attachment of a project tag to some other entity (`taggable_type`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectTaggable {
    pub id: Uuid,
    pub project_id: Uuid,
    pub project_tag_name: String,
    pub taggable_id: String,
    pub taggable_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ProjectTaggable {
    pub fn update(
        &self,
        client: &ApiClient,
        form: &ProjectTaggableForm,
    ) -> Result<DataResponse<ProjectTaggable>> {
        client.project_taggables().update(self.id, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.project_taggables().delete(self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectTaggableForm {
    pub project_id: Uuid,
    pub project_tag_name: String,
    pub taggable_id: String,
    pub taggable_type: String,
}

impl ProjectTaggableForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("project_id", self.project_id)
            .field("project_tag_name", &self.project_tag_name)
            .field("taggable_id", &self.taggable_id)
            .field("taggable_type", &self.taggable_type)
    }
}
