//! In-memory stand-in for the ems-shield API.
//!
//! Covers the routes the client's integration tests drive: the
//! authenticated user, server CRUD with server logs, and a single project
//! membership that honours `include`. Bodies are form-encoded like the real
//! API and every route sits behind bearer authentication.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

pub const USER_ID: Uuid = Uuid::from_u128(0x6a1f0c2e_3b5d_4e8f_9a7b_1c2d3e4f5a6b);
pub const USER_GROUP_ID: Uuid = Uuid::from_u128(0x9c8b7a6f_5e4d_4c3b_8a29_1f0e9d8c7b6a);
pub const PROJECT_ID: Uuid = Uuid::from_u128(0x0b9e7d6c_5a4f_4e3d_8c2b_1a0f9e8d7c6b);

const TIMESTAMP: &str = "2024-01-01 10:00:00";
const DEFAULT_LIMIT: usize = 15;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub user_group_id: Uuid,
    pub name: String,
    pub email: String,
    pub preferred_language: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub public_key: Option<String>,
    pub last_run_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Server {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub ip: String,
    pub port: Option<u16>,
    pub login: Option<String>,
    pub enabled: bool,
    pub position: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerLog {
    pub id: Uuid,
    pub server_id: Uuid,
    pub deploy_task_id: Option<Uuid>,
    pub status: String,
    pub output: Option<String>,
    pub position: Option<i64>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Raw form fields of `POST /api/server` and `PATCH /api/server/{id}`.
///
/// Everything arrives as text; `validate` turns it into typed values.
#[derive(Debug, Default, Deserialize)]
pub struct ServerInput {
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub ip: Option<String>,
    pub login: Option<String>,
    pub enabled: Option<String>,
    pub port: Option<String>,
    pub position: Option<String>,
}

struct ValidServer {
    project_id: Uuid,
    name: String,
    ip: String,
    login: String,
    enabled: bool,
    port: Option<u16>,
    position: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub include: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub servers: BTreeMap<Uuid, Server>,
    pub server_logs: Vec<ServerLog>,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    token: Arc<str>,
    db: Db,
}

pub fn app(token: &str) -> Router {
    let state = AppState {
        token: Arc::from(token),
        db: Db::default(),
    };
    Router::new()
        .route("/api/me", get(me))
        .route("/api/me/project", get(me_projects))
        .route("/api/server", get(list_servers).post(create_server))
        .route(
            "/api/server/{id}",
            get(get_server).patch(update_server).delete(delete_server),
        )
        .route("/api/server/{id}/serverLog", get(list_server_logs))
        .route("/api/userHasProject/{key}", get(get_user_has_project))
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app(token)).await
}

pub fn fixed_user() -> User {
    User {
        id: USER_ID,
        user_group_id: USER_GROUP_ID,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        preferred_language: Some("en".to_string()),
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
    }
}

pub fn fixed_project() -> Project {
    Project {
        id: PROJECT_ID,
        name: "shield".to_string(),
        public_key: Some("pk_123".to_string()),
        last_run_at: None,
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
    }
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == &*state.token);
    if !authorized {
        warn!(uri = %request.uri(), "rejected unauthenticated request");
        return error(StatusCode::UNAUTHORIZED, "Unauthenticated.", None);
    }
    next.run(request).await
}

fn error(status: StatusCode, message: &str, errors: Option<Value>) -> Response {
    let mut body = json!({ "message": message, "status_code": status.as_u16() });
    if let Some(errors) = errors {
        body["errors"] = errors;
    }
    (status, Json(body)).into_response()
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found", None)
}

fn data<T: Serialize>(status: StatusCode, item: T) -> Response {
    (status, Json(json!({ "data": item }))).into_response()
}

/// Slice `items` into the requested page and wrap it with pagination meta.
/// `links` is an object when there is a neighbouring page and `[]` otherwise.
pub fn paginate<T: Serialize>(items: &[T], query: &ListQuery, path: &str) -> Value {
    let limit = query.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_LIMIT);
    let total = items.len();
    let total_pages = total.div_ceil(limit).max(1);
    let page = query.page.unwrap_or(1).clamp(1, total_pages);
    let slice: Vec<&T> = items.iter().skip((page - 1) * limit).take(limit).collect();

    let mut links = serde_json::Map::new();
    if page > 1 {
        links.insert("previous".into(), json!(format!("{path}?page={}", page - 1)));
    }
    if page < total_pages {
        links.insert("next".into(), json!(format!("{path}?page={}", page + 1)));
    }
    let links = if links.is_empty() { json!([]) } else { Value::Object(links) };

    json!({
        "data": slice,
        "meta": {
            "pagination": {
                "total": total,
                "count": slice.len(),
                "per_page": limit,
                "current_page": page,
                "total_pages": total_pages,
                "links": links,
            }
        }
    })
}

impl ServerInput {
    /// Check required fields and formats, collecting messages per field.
    fn validate(self) -> Result<ValidServer, Value> {
        let mut errors = serde_json::Map::new();
        let mut fail = |field: &str, message: String| {
            errors.insert(field.to_string(), json!([message]));
        };

        let project_id = match self.project_id.as_deref().map(Uuid::parse_str) {
            Some(Ok(id)) => Some(id),
            Some(Err(_)) => {
                fail("project_id", "The project id must be a valid UUID.".to_string());
                None
            }
            None => {
                fail("project_id", "The project id field is required.".to_string());
                None
            }
        };

        let mut required = |field: &str, value: Option<String>| match value {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ => {
                fail(field, format!("The {field} field is required."));
                None
            }
        };
        let name = required("name", self.name);
        let ip = required("ip", self.ip);
        let login = required("login", self.login);

        let enabled = match self.enabled.as_deref() {
            None | Some("0") | Some("false") => Some(false),
            Some("1") | Some("true") => Some(true),
            Some(_) => {
                fail("enabled", "The enabled field must be true or false.".to_string());
                None
            }
        };

        let port = match self.port.as_deref().map(str::parse::<u16>) {
            None => Some(None),
            Some(Ok(port)) => Some(Some(port)),
            Some(Err(_)) => {
                fail("port", "The port must be an integer.".to_string());
                None
            }
        };

        let position = match self.position.as_deref().map(str::parse::<i64>) {
            None => Some(None),
            Some(Ok(position)) => Some(Some(position)),
            Some(Err(_)) => {
                fail("position", "The position must be an integer.".to_string());
                None
            }
        };

        match (project_id, name, ip, login, enabled, port, position) {
            (Some(project_id), Some(name), Some(ip), Some(login), Some(enabled), Some(port), Some(position)) => {
                Ok(ValidServer {
                    project_id,
                    name,
                    ip,
                    login,
                    enabled,
                    port,
                    position,
                })
            }
            _ => Err(Value::Object(errors)),
        }
    }
}

fn invalid(errors: Value) -> Response {
    error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "The given data was invalid.",
        Some(errors),
    )
}

async fn me() -> Response {
    data(StatusCode::OK, fixed_user())
}

async fn me_projects(Query(query): Query<ListQuery>) -> Response {
    Json(paginate(&[fixed_project()], &query, "/api/me/project")).into_response()
}

async fn list_servers(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let store = state.db.read().await;
    let servers: Vec<Server> = store.servers.values().cloned().collect();
    Json(paginate(&servers, &query, "/api/server")).into_response()
}

async fn create_server(State(state): State<AppState>, Form(input): Form<ServerInput>) -> Response {
    let valid = match input.validate() {
        Ok(valid) => valid,
        Err(errors) => return invalid(errors),
    };
    let server = Server {
        id: Uuid::new_v4(),
        project_id: valid.project_id,
        user_id: Some(USER_ID),
        name: valid.name,
        ip: valid.ip,
        port: valid.port,
        login: Some(valid.login),
        enabled: valid.enabled,
        position: valid.position,
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
    };
    let log = ServerLog {
        id: Uuid::new_v4(),
        server_id: server.id,
        deploy_task_id: None,
        status: "success".to_string(),
        output: Some(format!("registered {}", server.name)),
        position: Some(1),
        started_at: Some(TIMESTAMP.to_string()),
        finished_at: Some(TIMESTAMP.to_string()),
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
    };

    let mut store = state.db.write().await;
    store.server_logs.push(log);
    store.servers.insert(server.id, server.clone());
    info!(id = %server.id, name = %server.name, "server created");
    data(StatusCode::CREATED, server)
}

async fn get_server(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };
    let store = state.db.read().await;
    match store.servers.get(&id) {
        Some(server) => data(StatusCode::OK, server),
        None => not_found(),
    }
}

async fn update_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<ServerInput>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };
    let mut store = state.db.write().await;
    let Some(server) = store.servers.get_mut(&id) else {
        return not_found();
    };
    let valid = match input.validate() {
        Ok(valid) => valid,
        Err(errors) => return invalid(errors),
    };
    server.project_id = valid.project_id;
    server.name = valid.name;
    server.ip = valid.ip;
    server.login = Some(valid.login);
    server.enabled = valid.enabled;
    server.port = valid.port;
    server.position = valid.position;
    data(StatusCode::OK, server.clone())
}

async fn delete_server(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };
    let mut store = state.db.write().await;
    if store.servers.remove(&id).is_none() {
        return not_found();
    }
    store.server_logs.retain(|log| log.server_id != id);
    info!(%id, "server deleted");
    StatusCode::NO_CONTENT.into_response()
}

async fn list_server_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response {
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };
    let store = state.db.read().await;
    if !store.servers.contains_key(&id) {
        return not_found();
    }
    let logs: Vec<&ServerLog> = store
        .server_logs
        .iter()
        .filter(|log| log.server_id == id)
        .collect();
    Json(paginate(&logs, &query, &format!("/api/server/{id}/serverLog"))).into_response()
}

async fn get_user_has_project(
    Path(key): Path<String>,
    Query(query): Query<ListQuery>,
) -> Response {
    let ids = key
        .split_once(',')
        .and_then(|(user, project)| Some((Uuid::parse_str(user).ok()?, Uuid::parse_str(project).ok()?)));
    if ids != Some((USER_ID, PROJECT_ID)) {
        return not_found();
    }

    let mut membership = json!({
        "user_id": USER_ID,
        "project_id": PROJECT_ID,
        "user_role_id": "owner",
        "created_at": TIMESTAMP,
        "updated_at": TIMESTAMP,
    });
    let includes = query.include.as_deref().unwrap_or_default();
    for relation in includes.split(',').map(str::trim) {
        match relation {
            "user" => membership["user"] = json!({ "data": fixed_user() }),
            "project" => membership["project"] = json!({ "data": fixed_project() }),
            _ => {}
        }
    }
    data(StatusCode::OK, membership)
}
