use serde::{Deserialize, Serialize};

/// The acting user's own profile from `/settings/profile`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ProfileDto {
    pub username: String,
    pub role: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub status: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub allowed_ips: Vec<String>,
    pub last_login_ip: Option<String>,
}

/// Per-user settings row from `/settings`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SettingsDto {
    pub id: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub allowed_ips: Vec<String>,
}
