//! Ip log entries, `/api/ipLog`.

use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::managers::{CREATED, NO_CONTENT, OK};
use crate::params::ListParams;
use crate::resources::{DataResponse, IpLog, IpLogForm, ListResponse};

#[derive(Debug, Clone, Copy)]
pub struct IpLogManager<'a> {
    client: &'a ApiClient,
}

impl<'a> IpLogManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub fn all(&self, params: &ListParams) -> Result<ListResponse<IpLog>> {
        let url = self.client.url(&["api", "ipLog"], &params.query(None));
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn create(&self, form: &IpLogForm) -> Result<DataResponse<IpLog>> {
        let url = self.client.url(&["api", "ipLog"], &[]);
        let request = HttpRequest::form(HttpMethod::Post, url, &form.to_form());
        self.client.send(request, CREATED)
    }

    pub fn get(&self, ip_log_id: Uuid) -> Result<DataResponse<IpLog>> {
        let url = self.item_url(ip_log_id);
        self.client.send(HttpRequest::get(url), OK)
    }

    pub fn update(&self, ip_log_id: Uuid, form: &IpLogForm) -> Result<DataResponse<IpLog>> {
        let url = self.item_url(ip_log_id);
        let request = HttpRequest::form(HttpMethod::Patch, url, &form.to_form());
        self.client.send(request, OK)
    }

    pub fn delete(&self, ip_log_id: Uuid) -> Result<()> {
        let url = self.item_url(ip_log_id);
        self.client.send_empty(HttpRequest::delete(url), NO_CONTENT)
    }

    fn item_url(&self, ip_log_id: Uuid) -> String {
        self.client.url(&["api", "ipLog", &ip_log_id.to_string()], &[])
    }
}

#[cfg(test)]
mod tests {
    use crate::http::HttpMethod;
    use crate::resources::IpLogForm;
    use crate::testing::*;

    #[test]
    fn create_omits_missing_entry() {
        let transport = RecordingTransport::new();
        transport.respond(201, &data_body(IP_LOG_JSON));
        let client = transport.client();

        let form = IpLogForm {
            project_id: PROJECT_ID.parse().unwrap(),
            ip: "192.0.2.7".to_string(),
            ip_status_id: "blacklist".to_string(),
            entry: None,
        };
        let log = client.ip_logs().create(&form).unwrap().data;
        assert_eq!(log.position, Some(3));
        assert_eq!(log.user_id.map(|id| id.to_string()).as_deref(), Some(USER_ID));

        let req = transport.last_request();
        assert_eq!(req.url, format!("{BASE_URL}/api/ipLog"));
        assert_eq!(
            req.body.as_deref(),
            Some(format!("project_id={PROJECT_ID}&ip=192.0.2.7&ip_status_id=blacklist").as_str())
        );
    }

    #[test]
    fn update_and_delete_through_resource() {
        let transport = RecordingTransport::new();
        transport.respond(200, &data_body(IP_LOG_JSON));
        transport.respond(200, &data_body(IP_LOG_JSON));
        transport.respond(204, "");
        let client = transport.client();

        let log = client.ip_logs().get(OTHER_ID.parse().unwrap()).unwrap().data;
        assert_eq!(transport.last_request().url, format!("{BASE_URL}/api/ipLog/{OTHER_ID}"));

        let form = IpLogForm {
            project_id: log.project_id,
            ip: log.ip.clone(),
            ip_status_id: "whitelist".to_string(),
            entry: Some("false positive".to_string()),
        };
        log.update(&client, &form).unwrap();
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, format!("{BASE_URL}/api/ipLog/{OTHER_ID}"));

        log.delete(&client).unwrap();
        assert_eq!(transport.last_request().method, HttpMethod::Delete);
    }
}
