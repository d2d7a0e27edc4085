use serde_json::{json, Value};

/// Factory for group records with customizable fields.
pub struct GroupFactory {
    id: i64,
    title: String,
    projects: Vec<String>,
    status: String,
}

impl GroupFactory {
    /// Creates an enabled group titled `Group <id>` with one project.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Group {}", id),
            projects: vec!["alpha".to_string()],
            status: "Enabled".to_string(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn projects(mut self, projects: &[&str]) -> Self {
        self.projects = projects.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "projects": self.projects,
            "status": self.status,
            "description": null,
            "assigned_servers": 2,
            "created_at": "2024-03-01T10:00:00",
            "updated_at": null
        })
    }
}

/// Creates a default group record.
pub fn create_group(id: i64) -> Value {
    GroupFactory::new(id).build()
}
