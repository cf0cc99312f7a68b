//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over
//! real HTTP with the default ureq transport. Validates that routes, form
//! bodies, status checks and response shapes agree with the server.

use std::time::Duration;

use ems_shield::{ApiClient, ApiError, ClientConfig, ListParams, ServerForm};
use uuid::Uuid;

const TOKEN: &str = "integration-token";

/// Start the mock server on a background thread and return its base url.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, TOKEN).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(TOKEN, base_url).unwrap()
}

fn server_form(name: &str) -> ServerForm {
    ServerForm {
        project_id: mock_server::PROJECT_ID,
        name: name.to_string(),
        ip: "10.0.0.5".to_string(),
        login: "deploy".to_string(),
        enabled: true,
        port: Some(22),
        position: None,
    }
}

#[test]
fn can_create_client() {
    let client = ApiClient::new("token", "http://localhost:3000").unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
    assert!(format!("{:?}", client.transport()).contains("UreqTransport"));
}

#[test]
fn me_returns_authenticated_user() {
    let client = client(&spawn_server());

    let me = client.me().user().unwrap();
    assert_eq!(me.data.id, mock_server::USER_ID);
    assert_eq!(me.data.email, "ada@example.com");
    assert_eq!(me.data.user_group_id, mock_server::USER_GROUP_ID);

    let projects = client.me().projects(Some("owner"), &ListParams::new()).unwrap();
    assert_eq!(projects.data[0].id, mock_server::PROJECT_ID);
    let pagination = projects.meta.pagination.unwrap();
    assert_eq!(pagination.total, 1);
    assert!(!pagination.has_more());
}

#[test]
fn wrong_token_is_unauthenticated() {
    let base_url = spawn_server();
    let client = ApiClient::new("wrong-token", base_url).unwrap();

    let err = client.me().user().unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.expected_status(), Some(200));
    assert_eq!(err.error_response().unwrap().message, "Unauthenticated.");
}

#[test]
fn global_header_overrides_bearer_token() {
    let client = ClientConfig::new("wrong-token")
        .base_url(spawn_server())
        .header("Authorization", format!("Bearer {TOKEN}"))
        .build()
        .unwrap();

    assert!(client.me().user().is_ok());
}

#[test]
fn server_crud_lifecycle() {
    let client = client(&spawn_server());
    let servers = client.servers();

    // Step 1: list, should be empty.
    let list = servers.all(&ListParams::new()).unwrap();
    assert!(list.data.is_empty(), "expected empty list");

    // Step 2: create.
    let created = servers.create(&server_form("web-1")).unwrap().data;
    assert_eq!(created.name, "web-1");
    assert_eq!(created.port, Some(22));
    assert!(created.enabled);

    // Step 3: get it back.
    let fetched = servers.get(created.id).unwrap().data;
    assert_eq!(fetched, created);

    // Step 4: update through the resource.
    let mut form = server_form("web-2");
    form.enabled = false;
    let updated = fetched.update(&client, &form).unwrap().data;
    assert_eq!(updated.name, "web-2");
    assert!(!updated.enabled);

    // Step 5: list, should have one item.
    let list = servers.all(&ListParams::new().limit(10)).unwrap();
    assert_eq!(list.data.len(), 1);

    // Step 6: delete.
    updated.delete(&client).unwrap();

    // Step 7: get after delete, should be 404.
    let err = servers.get(created.id).unwrap_err();
    assert!(err.is_not_found());

    // Step 8: delete again, should be 404.
    let err = servers.delete(created.id).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.expected_status(), Some(204));
}

#[test]
fn invalid_server_is_validation_error() {
    let client = client(&spawn_server());

    let mut form = server_form("web-1");
    form.name = String::new();
    let err = client.servers().create(&form).unwrap_err();

    match err {
        ApiError::UnexpectedResponse {
            status,
            expected,
            error,
            ..
        } => {
            assert_eq!(status, 422);
            assert_eq!(expected, 201);
            let error = error.unwrap();
            assert_eq!(error.status_code, Some(422));
            assert!(error.errors.unwrap().get("name").is_some());
        }
        other => panic!("expected UnexpectedResponse, got {other:?}"),
    }
}

#[test]
fn server_logs_follow_their_server() {
    let client = client(&spawn_server());

    let server = client.servers().create(&server_form("web-1")).unwrap().data;
    let logs = server.server_logs(&client, &ListParams::new()).unwrap();
    assert_eq!(logs.data.len(), 1);
    assert_eq!(logs.data[0].server_id, server.id);
    assert_eq!(logs.data[0].status, "success");

    let err = client
        .servers()
        .server_logs(Uuid::nil(), &ListParams::new())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn user_has_project_include() {
    let client = client(&spawn_server());
    let memberships = client.user_has_projects();

    let plain = memberships
        .get(mock_server::USER_ID, mock_server::PROJECT_ID, None)
        .unwrap()
        .data;
    assert_eq!(plain.user_role_id, "owner");
    assert!(plain.user().is_none());

    let full = memberships
        .get(mock_server::USER_ID, mock_server::PROJECT_ID, Some("user,project"))
        .unwrap()
        .data;
    assert_eq!(full.user().unwrap().name, "Ada");
    assert_eq!(full.project().unwrap().public_key.as_deref(), Some("pk_123"));
}

#[test]
fn closed_port_is_transport_error() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = client(&format!("http://{addr}"));

    let err = client.me().user().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
    assert_eq!(err.expected_status(), None);
}

#[test]
fn silent_server_hits_timeout() {
    // Connections complete in the backlog but nobody ever answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let client = ClientConfig::new(TOKEN)
        .base_url(format!("http://{}", listener.local_addr().unwrap()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.me().user().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
    drop(listener);
}
