//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse, Transport};

pub const BASE_URL: &str = "http://localhost:3000";

/// Records every request and replays queued responses in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        });
    }

    pub fn client(&self) -> ApiClient {
        ClientConfig::new("test-token")
            .base_url(BASE_URL)
            .build_with_transport(Arc::new(self.clone()))
            .unwrap()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued"))
    }
}

/// `{"data": ..., "meta": {"pagination": ...}}` around `items`.
pub fn list_body(items: &[&str]) -> String {
    format!(
        r#"{{"data":[{}],"meta":{{"pagination":{{"total":{n},"count":{n},"per_page":15,"current_page":1,"total_pages":1,"links":[]}}}}}}"#,
        items.join(","),
        n = items.len()
    )
}

pub fn data_body(item: &str) -> String {
    format!(r#"{{"data":{item}}}"#)
}

pub const USER_ID: &str = "6a1f0c2e-3b5d-4e8f-9a7b-1c2d3e4f5a6b";
pub const PROJECT_ID: &str = "0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b";
pub const SERVER_ID: &str = "f3c1a2b4-d5e6-4f70-8192-a3b4c5d6e7f8";
pub const GROUP_ID: &str = "9c8b7a6f-5e4d-4c3b-8a29-1f0e9d8c7b6a";
pub const OTHER_ID: &str = "11111111-2222-4333-8444-555555555555";

pub const USER_JSON: &str = r#"{"id":"6a1f0c2e-3b5d-4e8f-9a7b-1c2d3e4f5a6b","user_group_id":"9c8b7a6f-5e4d-4c3b-8a29-1f0e9d8c7b6a","name":"Ada","email":"ada@example.com","preferred_language":"en","created_at":"2024-01-01 10:00:00","updated_at":"2024-01-02 10:00:00"}"#;

pub const PROJECT_JSON: &str = r#"{"id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","name":"shield","public_key":"pk_123","last_run_at":null,"created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const SERVER_JSON: &str = r#"{"id":"f3c1a2b4-d5e6-4f70-8192-a3b4c5d6e7f8","project_id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","user_id":"6a1f0c2e-3b5d-4e8f-9a7b-1c2d3e4f5a6b","name":"web-1","ip":"10.0.0.5","port":22,"login":"deploy","enabled":true,"position":1,"created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const SERVER_LOG_JSON: &str = r#"{"id":"11111111-2222-4333-8444-555555555555","server_id":"f3c1a2b4-d5e6-4f70-8192-a3b4c5d6e7f8","deploy_task_id":null,"status":"success","output":"ok","position":1,"started_at":"2024-01-01 10:00:00","finished_at":"2024-01-01 10:01:00","created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:01:00"}"#;

pub const IP_JSON: &str = r#"{"project_id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","ip":"192.0.2.7","ip_status_id":"blacklist","v6":false,"expires_at":null,"created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const IP_LOG_JSON: &str = r#"{"id":"11111111-2222-4333-8444-555555555555","project_id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","ip":"192.0.2.7","ip_status_id":"blacklist","user_id":"6a1f0c2e-3b5d-4e8f-9a7b-1c2d3e4f5a6b","entry":"brute force","position":3,"created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const PROJECT_TAG_JSON: &str = r##"{"project_id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","name":"edge","color":"#ff0000","created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"##;

pub const PROJECT_TAGGABLE_JSON: &str = r#"{"id":"11111111-2222-4333-8444-555555555555","project_id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","project_tag_name":"edge","taggable_id":"192.0.2.7","taggable_type":"ip","created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const IP_STATUS_VERSION_JSON: &str = r#"{"ip_status_id":"blacklist","i18n_lang_id":"en","description":"Blocked","created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const DEPLOY_TASK_JSON: &str = r#"{"id":"11111111-2222-4333-8444-555555555555","project_id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","user_id":null,"status":"running","output":null,"started_at":"2024-01-01 10:00:00","finished_at":null,"created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const USER_HAS_PROJECT_JSON: &str = r#"{"user_id":"6a1f0c2e-3b5d-4e8f-9a7b-1c2d3e4f5a6b","project_id":"0b9e7d6c-5a4f-4e3d-8c2b-1a0f9e8d7c6b","user_role_id":"owner","created_at":"2024-01-01 10:00:00","updated_at":"2024-01-01 10:00:00"}"#;

pub const VALIDATION_ERROR_JSON: &str = r#"{"message":"The given data was invalid.","errors":{"name":["The name field is required."]},"status_code":422}"#;

pub const NOT_FOUND_JSON: &str = r#"{"message":"Not found","status_code":404}"#;
