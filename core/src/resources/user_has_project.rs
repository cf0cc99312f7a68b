//! Project memberships with optionally included user and project.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::Form;
use crate::resources::{DataResponse, Project, User};

/// Membership of a user in a project with a given role.
///
/// `user` and `project` are only filled when requested with
/// `include=user,project`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserHasProject {
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub user_role_id: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub user: Option<DataResponse<User>>,
    #[serde(default)]
    pub project: Option<DataResponse<Project>>,
}

impl UserHasProject {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref().map(|user| &user.data)
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref().map(|project| &project.data)
    }

    pub fn update(
        &self,
        client: &ApiClient,
        form: &UserHasProjectForm,
    ) -> Result<DataResponse<UserHasProject>> {
        client
            .user_has_projects()
            .update(self.user_id, self.project_id, form)
    }

    pub fn delete(&self, client: &ApiClient) -> Result<()> {
        client.user_has_projects().delete(self.user_id, self.project_id)
    }
}

/// Input for creating or updating a membership.
///
/// A user/project pair can only be linked once, and a project has at most
/// one `Owner`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserHasProjectForm {
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub user_role_id: String,
}

impl UserHasProjectForm {
    pub(crate) fn to_form(&self) -> Form {
        Form::new()
            .field("user_id", self.user_id)
            .field("project_id", self.project_id)
            .field("user_role_id", &self.user_role_id)
    }
}
