//! One manager per API resource.
//!
//! Managers borrow the `ApiClient`. Every method builds one request, sends
//! it, and checks the response against the single status code that
//! operation succeeds with: 200 for reads and updates, 201 for creates and
//! 204 for deletes.

mod deploy_task;
mod i18n_lang;
mod ip;
mod ip_log;
mod ip_status_version;
mod me;
mod project_tag;
mod project_taggable;
mod server;
mod server_log;
mod user;
mod user_has_project;

pub use deploy_task::DeployTaskManager;
pub use i18n_lang::I18nLangManager;
pub use ip::IpManager;
pub use ip_log::IpLogManager;
pub use ip_status_version::IpStatusVersionManager;
pub use me::MeManager;
pub use project_tag::ProjectTagManager;
pub use project_taggable::ProjectTaggableManager;
pub use server::ServerManager;
pub use server_log::ServerLogManager;
pub use user::UserManager;
pub use user_has_project::UserHasProjectManager;

pub(crate) const OK: u16 = 200;
pub(crate) const CREATED: u16 = 201;
pub(crate) const NO_CONTENT: u16 = 204;

/// `"{a},{b}"` path key used by resources with composite identity.
pub(crate) fn composite_key(first: impl std::fmt::Display, second: impl std::fmt::Display) -> String {
    format!("{first},{second}")
}
