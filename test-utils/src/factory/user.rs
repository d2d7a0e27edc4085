use serde_json::{json, Value};

/// Factory for user records with customizable fields.
pub struct UserFactory {
    id: i64,
    username: String,
    role: String,
    status: String,
    allowed_ips: Vec<String>,
}

impl UserFactory {
    /// Creates an active `Admin 1L` user named `user<id>` without IP restriction.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: format!("user{}", id),
            role: "Admin 1L".to_string(),
            status: "active".to_string(),
            allowed_ips: vec!["0.0.0.0/0".to_string()],
        }
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn allowed_ips(mut self, ips: &[&str]) -> Self {
        self.allowed_ips = ips.iter().map(|ip| ip.to_string()).collect();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "email": format!("{}@example.com", self.username),
            "phone_number": null,
            "role": self.role,
            "status": self.status,
            "allowed_ips": self.allowed_ips,
            "last_login_ip": "198.51.100.7",
            "created_at": "2024-03-01T10:00:00",
            "updated_at": null
        })
    }
}

/// Creates a default user record.
pub fn create_user(id: i64) -> Value {
    UserFactory::new(id).build()
}
