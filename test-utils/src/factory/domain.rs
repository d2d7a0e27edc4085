use serde_json::{json, Value};

/// Factory for domain records with customizable fields.
pub struct DomainFactory {
    id: i64,
    domain_name: String,
    group_id: Option<i64>,
    status: String,
    ns_records: Vec<String>,
}

impl DomainFactory {
    /// Creates an active domain named `domain<id>.example` with two NS records.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            domain_name: format!("domain{}.example", id),
            group_id: None,
            status: "Active".to_string(),
            ns_records: vec!["ns1.example".to_string(), "ns2.example".to_string()],
        }
    }

    pub fn domain_name(mut self, name: &str) -> Self {
        self.domain_name = name.to_string();
        self
    }

    pub fn group_id(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "domain_name": self.domain_name,
            "group_id": self.group_id,
            "status": self.status,
            "ns_records": self.ns_records,
            "a_records": ["203.0.113.10"],
            "aaaa_records": [],
            "created_at": "2024-03-01T10:00:00",
            "updated_at": null,
            "created_by": 1,
            "updated_by": null
        })
    }
}

/// Creates a default domain record.
pub fn create_domain(id: i64) -> Value {
    DomainFactory::new(id).build()
}

/// Creates a list of `count` domains with ids starting at 1.
pub fn list(count: i64) -> Value {
    Value::Array((1..=count).map(create_domain).collect())
}
