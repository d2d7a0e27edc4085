use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct TokenDto {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `GET /check-auth`.
#[derive(Serialize, Deserialize, Clone)]
pub struct CheckAuthDto {
    #[serde(default)]
    pub authenticated: bool,
    pub username: String,
    pub role: String,
}
