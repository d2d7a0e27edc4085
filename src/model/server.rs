use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    #[default]
    Running,
    #[serde(rename = "stoped")]
    Stopped,
    Reserv,
    Abuse,
    #[serde(rename = "maintaince")]
    Maintenance,
    /// Any status this client does not know, and the placeholder used when a
    /// server lookup fails.
    #[serde(other)]
    Unknown,
}

impl ServerStatus {
    pub fn label(self) -> &'static str {
        match self {
            ServerStatus::Running => "Running",
            ServerStatus::Stopped => "Stopped",
            ServerStatus::Reserv => "Reserv",
            ServerStatus::Abuse => "Abuse",
            ServerStatus::Maintenance => "Maintenance",
            ServerStatus::Unknown => "Unknown",
        }
    }

    /// Badge class, keyed by the wire value like the rest of the status badges.
    pub fn badge(self) -> &'static str {
        match self {
            ServerStatus::Running => "status-running",
            ServerStatus::Stopped => "status-stoped",
            ServerStatus::Reserv => "status-reserv",
            ServerStatus::Abuse => "status-abuse",
            ServerStatus::Maintenance => "status-maintaince",
            ServerStatus::Unknown => "status-unknown",
        }
    }
}

/// Status values accepted by the backend, in form order.
pub const SERVER_STATUSES: &[&str] = &["running", "stoped", "reserv", "abuse", "maintaince"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerDto {
    pub id: i64,
    pub os: Option<String>,
    pub ip_address: String,
    pub additional_ips: Option<String>,
    pub comments: Option<String>,
    pub hoster: Option<String>,
    #[serde(default)]
    pub status: ServerStatus,
    pub group_id: Option<i64>,
    pub project: Option<String>,
    pub country: Option<String>,
    pub ssh_username: Option<String>,
    pub ssh_password: Option<String>,
    pub ssh_port: Option<i64>,
    pub container_password: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

/// Renders a group reference the way every table shows it.
pub fn group_label(group_id: Option<i64>) -> String {
    match group_id {
        Some(id) if id != 0 => format!("GRP_{}", id),
        _ => "-".to_string(),
    }
}
