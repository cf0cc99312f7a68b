//! Deployment servers and their logs.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{CREATED, NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, ListResponse, Server, ServerForm, ServerLog};

#[derive(Debug, Clone, Copy)]
pub struct ServerManager<'a> {
    client: &'a ApiClient,
}

impl<'a> ServerManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<Server>> {
        let url = self.client.url(&["api", "server"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn create(&self, form: &ServerForm) -> Result<DataResponse<Server>> {
        let url = self.client.url(&["api", "server"], &[]);
        let request = HttpRequest::form(HttpMethod::Post, url, &form.to_form());
        self.client.send(request, CREATED)
    }

    pub fn get(&self, server_id: Uuid) -> Result<DataResponse<Server>> {
        let url = self.item_url(server_id);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(&self, server_id: Uuid, form: &ServerForm) -> Result<DataResponse<Server>> {
        let url = self.item_url(server_id);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, server_id: Uuid) -> Result<()> {
        let url = self.item_url(server_id);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    /// `GET /api/server/{serverId}/serverLog`
    pub fn server_logs(&self, server_id: Uuid, params: &ListParams) -> Result<ListResponse<ServerLog>> {
        let id = server_id.to_string();
        let url = self
            .client
            .url(&["api", "server", &id, "serverLog"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    fn item_url(&self, server_id: Uuid) -> String {
        self.client.url(&["api", "server", &server_id.to_string()], &[])
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::error::ApiError;
    use crate::http::HttpMethod;
    use crate::params::ListParams;
    use crate::resources::ServerForm;
    use crate::testing::*;

    fn form() -> ServerForm {
        ServerForm {
            project_id: PROJECT_ID.parse().unwrap(),
            name: "web-1".to_string(),
            ip: "10.0.0.5".to_string(),
            login: "deploy".to_string(),
            enabled: true,
            port: Some(22),
            position: None,
        }
    }

    #[test]
    fn all_passes_list_params() {
        let transport = RecordingTransport::new();
        transport.respond(200, &list_body(&[SERVER_JSON]));
        let client = transport.client();

        let servers = client
            .servers()
            .all(&ListParams::new().search("web").order_by("name,asc"))
            .unwrap();
        assert_eq!(servers.data.len(), 1);
        assert_eq!(servers.data[0].port, Some(22));

        assert_eq!(
            transport.last_request().url,
            format!("{BASE_URL}/api/server?search=web&order_by=name%2Casc")
        );
    }

    #[test]
    fn create_posts_form_and_expects_201() {
        let transport = RecordingTransport::new();
        transport.respond(201, &data_body(SERVER_JSON));
        let client = transport.client();

        let created = client.servers().create(&form()).unwrap();
        assert_eq!(created.data.name, "web-1");
        assert!(created.data.enabled);

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, format!("{BASE_URL}/api/server"));
        assert_eq!(
            req.body.as_deref(),
            Some(format!("project_id={PROJECT_ID}&name=web-1&ip=10.0.0.5&login=deploy&enabled=1&port=22").as_str())
        );
    }

    #[test]
    fn create_with_200_is_still_unexpected() {
        let transport = RecordingTransport::new();
        transport.respond(200, &data_body(SERVER_JSON));
        let client = transport.client();

        let err = client.servers().create(&form()).unwrap_err();
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.expected_status(), Some(201));
    }

    #[test]
    fn create_validation_error_carries_field_errors() {
        let transport = RecordingTransport::new();
        transport.respond(422, VALIDATION_ERROR_JSON);
        let client = transport.client();

        let err = client.servers().create(&ServerForm::default()).unwrap_err();
        let body = err.error_response().unwrap();
        assert_eq!(body.status_code, Some(422));
        assert_eq!(body.errors.as_ref().unwrap()["name"][0], "The name field is required.");
    }

    #[test]
    fn update_patches_item_route() {
        let transport = RecordingTransport::new();
        transport.respond(200, &data_body(SERVER_JSON));
        let client = transport.client();

        let id: Uuid = SERVER_ID.parse().unwrap();
        client.servers().update(id, &form()).unwrap();

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, format!("{BASE_URL}/api/server/{SERVER_ID}"));
    }

    #[test]
    fn delete_expects_204() {
        let transport = RecordingTransport::new();
        transport.respond(204, "");
        transport.respond(404, NOT_FOUND_JSON);
        let client = transport.client();

        let id: Uuid = SERVER_ID.parse().unwrap();
        client.servers().delete(id).unwrap();
        assert_eq!(transport.last_request().method, HttpMethod::Delete);

        let err = client.servers().delete(id).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, ApiError::UnexpectedResponse { expected: 204, .. }));
    }

    #[test]
    fn server_logs_through_resource() {
        let transport = RecordingTransport::new();
        transport.respond(200, &data_body(SERVER_JSON));
        transport.respond(200, &list_body(&[SERVER_LOG_JSON]));
        let client = transport.client();

        let server = client.servers().get(SERVER_ID.parse().unwrap()).unwrap().data;
        let logs = server.server_logs(&client, &ListParams::new().limit(10)).unwrap();
        assert_eq!(logs.data[0].status, "success");
        assert!(logs.data[0].deploy_task_id.is_none());

        assert_eq!(
            transport.last_request().url,
            format!("{BASE_URL}/api/server/{SERVER_ID}/serverLog?limit=10")
        );
    }
}
