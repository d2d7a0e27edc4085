use chrono::NaiveDateTime;
use serde_json::Value;

use crate::model::history::HistoryEntryDto;

pub const RECORD_CREATED: &str = "Record created";
pub const RECORD_DELETED: &str = "Record deleted";

#[derive(Clone, Debug, PartialEq)]
pub struct FieldChange {
    pub field: String,
    pub old: String,
    pub new: String,
}

/// What a history entry changed.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeSummary {
    Created,
    Deleted,
    Fields(Vec<FieldChange>),
}

impl ChangeSummary {
    /// Reads the `changes` object of a history entry.
    ///
    /// A missing or null object and `{"all": "created"}` both mean creation.
    pub fn from_changes(changes: &Value) -> Self {
        let Some(map) = changes.as_object() else {
            return ChangeSummary::Created;
        };

        match map.get("all").and_then(Value::as_str) {
            Some("created") => return ChangeSummary::Created,
            Some("deleted") => return ChangeSummary::Deleted,
            _ => {}
        }

        ChangeSummary::Fields(
            map.iter()
                .map(|(field, change)| FieldChange {
                    field: field.clone(),
                    old: change_value(change.get("old")),
                    new: change_value(change.get("new")),
                })
                .collect(),
        )
    }

    /// One-line rendering used in the history table.
    pub fn describe(&self) -> String {
        match self {
            ChangeSummary::Created => RECORD_CREATED.to_string(),
            ChangeSummary::Deleted => RECORD_DELETED.to_string(),
            ChangeSummary::Fields(changes) if changes.is_empty() => "-".to_string(),
            ChangeSummary::Fields(changes) => changes
                .iter()
                .map(|change| format!("{}: {} → {}", change.field, change.old, change.new))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// A history entry ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRow {
    pub timestamp: String,
    pub actor: String,
    pub action: String,
    pub changes: ChangeSummary,
}

impl From<&HistoryEntryDto> for HistoryRow {
    fn from(entry: &HistoryEntryDto) -> Self {
        let actor = match (&entry.username, entry.user_id) {
            (Some(username), _) if !username.is_empty() => username.clone(),
            (_, Some(user_id)) => format!("User #{}", user_id),
            _ => "System".to_string(),
        };

        Self {
            timestamp: format_timestamp(&entry.timestamp),
            actor,
            action: entry.action.clone(),
            changes: ChangeSummary::from_changes(&entry.changes),
        }
    }
}

/// Converts entries keeping the backend's order.
pub fn history_rows(entries: &[HistoryEntryDto]) -> Vec<HistoryRow> {
    entries.iter().map(HistoryRow::from).collect()
}

/// `YYYY-MM-DD HH:MM:SS`, or the raw string when it is not an ISO timestamp.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('Z');
    let trimmed = trimmed.split('.').next().unwrap_or(trimmed);
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        Ok(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn change_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(text)) if text.is_empty() => "-".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}
