//! Data types mirroring the JSON shapes returned by the API.
//!
//! # Design
//! Single items arrive wrapped as `{"data": {...}}` and lists as
//! `{"data": [...], "meta": {"pagination": {...}}}`; both envelopes are
//! generic. Relations requested through `include` are embedded with the same
//! `{"data": ...}` wrapping, so they are modelled as
//! `Option<DataResponse<T>>`. Timestamps stay the strings the API sends.
//!
//! Resources carry no reference to the client. Their convenience methods
//! take `&ApiClient` and forward to the matching manager with the
//! resource's own identity filled in.

mod deploy_task;
mod i18n_lang;
mod ip;
mod ip_log;
mod ip_status_version;
mod project;
mod project_tag;
mod project_taggable;
mod server;
mod server_log;
mod user;
mod user_has_project;

pub use deploy_task::DeployTask;
pub use i18n_lang::I18nLang;
pub use ip::{Ip, IpForm};
pub use ip_log::{IpLog, IpLogForm};
pub use ip_status_version::{IpStatusVersion, IpStatusVersionForm};
pub use project::Project;
pub use project_tag::{ProjectTag, ProjectTagForm, ProjectTagUpdateForm};
pub use project_taggable::{ProjectTaggable, ProjectTaggableForm};
pub use server::{Server, ServerForm};
pub use server_log::ServerLog;
pub use user::{User, UserForm};
pub use user_has_project::{UserHasProject, UserHasProjectForm};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"data": T}` envelope of single-item responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataResponse<T> {
    pub data: T,
}

/// `{"data": [T], "meta": ...}` envelope of list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    /// `{"previous": url, "next": url}`, or `[]` when there is neither.
    #[serde(default)]
    pub links: Value,
}

impl Pagination {
    pub fn next(&self) -> Option<&str> {
        self.links.get("next").and_then(Value::as_str)
    }

    pub fn previous(&self) -> Option<&str> {
        self.links.get("previous").and_then(Value::as_str)
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Error body returned alongside every unexpected status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
    /// Validation errors keyed by field name.
    #[serde(default)]
    pub errors: Option<Value>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub debug: Option<Value>,
}
