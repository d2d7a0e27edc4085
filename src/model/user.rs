use serde::{Deserialize, Serialize};

pub const USER_STATUSES: &[&str] = &["active", "suspended", "inactive"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub status: String,
    #[serde(default)]
    pub allowed_ips: Vec<String>,
    pub last_login_ip: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Display label for a user status.
pub fn user_status_label(status: &str) -> &str {
    match status {
        "active" => "Active",
        "suspended" => "Suspended",
        "inactive" => "Inactive",
        other => other,
    }
}
