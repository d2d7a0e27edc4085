use serde::{Deserialize, Serialize};

pub const DOMAIN_STATUSES: &[&str] = &["Active", "Suspended", "Abuse", "Maintance"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DomainDto {
    pub id: i64,
    pub domain_name: String,
    pub group_id: Option<i64>,
    pub status: String,
    pub ns_records: Option<Vec<String>>,
    pub a_records: Option<Vec<String>>,
    pub aaaa_records: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}
