use serde_json::{json, Value};

/// History entry recording the creation of a record.
pub fn created(id: i64) -> Value {
    entry(id, "create", json!({ "all": "created" }), Some(1))
}

/// History entry recording the deletion of a record.
pub fn deleted(id: i64) -> Value {
    entry(id, "delete", json!({ "all": "deleted" }), Some(1))
}

/// History entry recording a single field update.
pub fn updated(id: i64, field: &str, old: Value, new: Value) -> Value {
    entry(
        id,
        "update",
        json!({ field: { "old": old, "new": new } }),
        Some(1),
    )
}

/// History entry with arbitrary changes and an optional acting user.
///
/// A `None` user marks a change made by the system.
pub fn entry(id: i64, action: &str, changes: Value, user_id: Option<i64>) -> Value {
    json!({
        "id": id,
        "action": action,
        "table_name": "servers",
        "record_id": 1,
        "changes": changes,
        "timestamp": "2024-03-01T10:15:30",
        "user_id": user_id,
        "username": null
    })
}

/// Wraps entries into the list body the history endpoints return.
pub fn list(entries: Vec<Value>) -> Value {
    Value::Array(entries)
}
