use serde::{Deserialize, Serialize};

pub const ACCOUNT_STATUSES: &[&str] = &["Active", "Deactivated"];
pub const CURRENCIES: &[&str] = &["USD", "EUR", "UAH"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FinanceAccountDto {
    pub id: i64,
    pub server_id: i64,
    pub account_status: String,
    pub price: Option<f64>,
    pub currency: String,
    pub payment_date: Option<String>,
    pub group_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
