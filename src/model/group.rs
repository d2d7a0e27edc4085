use serde::{Deserialize, Serialize};

pub const GROUP_STATUSES: &[&str] = &["Enabled", "Disabled"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub projects: Vec<String>,
    pub status: String,
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_servers: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
