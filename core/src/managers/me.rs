//! Routes under `/api/me`, scoped to the token's own user.

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::HttpRequest;
use crate::managers::OK;
use crate::params::ListParams;
use crate::resources::{DataResponse, ListResponse, Project, User};

/// Endpoints scoped to the authenticated user.
#[derive(Debug, Clone, Copy)]
pub struct MeManager<'a> {
    client: &'a ApiClient,
}

impl<'a> MeManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    /// `GET /api/me`
    pub fn user(&self) -> Result<DataResponse<User>> {
        let url = self.client.url(&["api", "me"], &[]);
        self.client.send(HttpRequest::get(url), OK)
    }

    /// `GET /api/me/project`, optionally filtered by `user_role_id`.
    pub fn projects(
        &self,
        user_role_id: Option<&str>,
        params: &ListParams,
    ) -> Result<ListResponse<Project>> {
        let query = params.query(user_role_id.map(|role| ("user_role_id", role)));
        let url = self.client.url(&["api", "me", "project"], &query);
        self.client.send(HttpRequest::get(url), OK)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::HttpMethod;
    use crate::params::ListParams;
    use crate::testing::*;

    #[test]
    fn user_hits_me_route() {
        let transport = RecordingTransport::new();
        transport.respond(200, &data_body(USER_JSON));
        let client = transport.client();

        let me = client.me().user().unwrap();
        assert_eq!(me.data.name, "Ada");
        assert_eq!(me.data.id.to_string(), USER_ID);
        assert!(me.data.password.is_none());

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, format!("{BASE_URL}/api/me"));
        assert!(req.body.is_none());
    }

    #[test]
    fn projects_puts_role_filter_first() {
        let transport = RecordingTransport::new();
        transport.respond(200, &list_body(&[PROJECT_JSON]));
        let client = transport.client();

        let projects = client
            .me()
            .projects(Some("owner"), &ListParams::new().page(1).limit(5))
            .unwrap();
        assert_eq!(projects.data[0].name, "shield");
        assert_eq!(projects.meta.pagination.unwrap().total, 1);

        assert_eq!(
            transport.last_request().url,
            format!("{BASE_URL}/api/me/project?user_role_id=owner&page=1&limit=5")
        );
    }

    #[test]
    fn unauthenticated_user_is_unexpected_response() {
        let transport = RecordingTransport::new();
        transport.respond(401, r#"{"message":"Unauthenticated.","status_code":401}"#);
        let client = transport.client();

        let err = client.me().user().unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.expected_status(), Some(200));
        assert_eq!(err.error_response().unwrap().message, "Unauthenticated.");
    }
}
