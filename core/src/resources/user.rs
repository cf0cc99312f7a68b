//! Users and the form for updating them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::{Form, ListParams};
use crate::resources::{DataResponse, IpLog, ListResponse, Project};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub user_group_id: Uuid,
    pub name: String,
    pub email: String,
    /// Only ever present in responses to requests that set it.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn update(&self, client: &ApiClient, form: &UserForm) -> Result<DataResponse<User>> {
        client.users().update(self.id, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.users().delete(self.id)
    }

    /// Projects this user belongs to, optionally filtered by role.
    pub fn projects(
        &self,
        client: &ApiClient,
        user_role_id: Option<&str>,
        params: &ListParams,
    ) -> Result<ListResponse<Project>> {
        client.users().projects(self.id, user_role_id, params)
    }

    pub fn ip_logs(&self, client: &ApiClient, params: &ListParams) -> Result<ListResponse<IpLog>> {
        client.users().ip_logs(self.id, params)
    }
}

/// Input for `PATCH /api/user/{userId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub user_group_id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub preferred_language: Option<String>,
}

impl UserForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("user_group_id", self.user_group_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password)
            .optional("preferred_language", self.preferred_language.as_deref())
    }
}
