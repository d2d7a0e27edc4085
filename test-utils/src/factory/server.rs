use serde_json::{json, Value};

/// Factory for server records with customizable fields.
pub struct ServerFactory {
    id: i64,
    ip_address: String,
    status: String,
    group_id: Option<i64>,
    ssh_password: String,
}

impl ServerFactory {
    /// Creates a running server with IP `10.0.0.<id>` and no group.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ip_address: format!("10.0.0.{}", id),
            status: "running".to_string(),
            group_id: None,
            ssh_password: format!("secret-{}", id),
        }
    }

    pub fn ip_address(mut self, ip_address: &str) -> Self {
        self.ip_address = ip_address.to_string();
        self
    }

    /// Sets the raw backend status value (`running`, `stoped`, `reserv`, `abuse`,
    /// `maintaince`).
    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn group_id(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "os": "Ubuntu 22.04",
            "ip_address": self.ip_address,
            "additional_ips": null,
            "comments": null,
            "hoster": "Hetzner",
            "status": self.status,
            "group_id": self.group_id,
            "project": "alpha",
            "country": "DE",
            "ssh_username": "root",
            "ssh_password": self.ssh_password,
            "ssh_port": 22,
            "container_password": null,
            "created_at": "2024-03-01T10:00:00",
            "updated_at": null,
            "created_by": 1,
            "updated_by": null
        })
    }
}

/// Creates a default server record.
pub fn create_server(id: i64) -> Value {
    ServerFactory::new(id).build()
}

/// Creates a list of `count` servers with ids starting at 1.
pub fn list(count: i64) -> Value {
    Value::Array((1..=count).map(create_server).collect())
}
