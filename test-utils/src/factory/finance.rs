use serde_json::{json, Value};

/// Factory for finance account records with customizable fields.
pub struct AccountFactory {
    id: i64,
    server_id: i64,
    price: f64,
    currency: String,
    account_status: String,
}

impl AccountFactory {
    /// Creates an active account of 10.50 USD billed for server `server_id`.
    pub fn new(id: i64, server_id: i64) -> Self {
        Self {
            id,
            server_id,
            price: 10.5,
            currency: "USD".to_string(),
            account_status: "Active".to_string(),
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn account_status(mut self, status: &str) -> Self {
        self.account_status = status.to_string();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "server_id": self.server_id,
            "account_status": self.account_status,
            "price": self.price,
            "currency": self.currency,
            "payment_date": "2024-05-20T00:00:00",
            "group_id": null,
            "created_at": "2024-03-01T10:00:00",
            "updated_at": null
        })
    }
}

/// Creates a default account billed for `server_id`.
pub fn create_account(id: i64, server_id: i64) -> Value {
    AccountFactory::new(id, server_id).build()
}
