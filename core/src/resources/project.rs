//! Projects as embedded in lists and includes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub last_run_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
