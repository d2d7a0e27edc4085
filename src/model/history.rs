use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One audit record from a `/{entity}/{id}/history` endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryEntryDto {
    pub id: i64,
    pub action: String,
    pub table_name: Option<String>,
    pub record_id: Option<i64>,
    /// Either `{"all": "created" | "deleted"}` or `{field: {old, new}}`.
    #[serde(default)]
    pub changes: Value,
    pub timestamp: String,
    pub user_id: Option<i64>,
    pub username: Option<String>,
}
