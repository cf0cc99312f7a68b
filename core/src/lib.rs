//! Synchronous client for the ems-shield REST API.
//!
//! # Overview
//! `ApiClient` holds the base url, bearer token and global headers. Each API
//! resource has a manager (`client.servers()`, `client.ips()`, ...) whose
//! methods map one-to-one onto endpoints and return typed responses. Fetched
//! resources expose convenience methods (`server.update(&client, &form)`)
//! that forward to the same managers.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest`/`HttpResponse`);
//!   the network round-trip happens behind the `Transport` trait, so every
//!   manager can be tested against a recording transport.
//! - Each operation succeeds on exactly one status code. Anything else is an
//!   `ApiError::UnexpectedResponse` carrying the decoded error body.
//! - Request bodies are `application/x-www-form-urlencoded`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod managers;
pub mod params;
pub mod resources;

#[cfg(test)]
mod testing;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use params::{Form, ListParams};
pub use resources::{
    DataResponse, DeployTask, ErrorResponse, I18nLang, Ip, IpForm, IpLog, IpLogForm,
    IpStatusVersion, IpStatusVersionForm, ListResponse, Meta, Pagination, Project, ProjectTag,
    ProjectTagForm, ProjectTagUpdateForm, ProjectTaggable, ProjectTaggableForm, Server, ServerForm,
    ServerLog, User, UserForm, UserHasProject, UserHasProjectForm,
};
