//! Per-entity descriptions driving the generic list screens.
//!
//! Each entity implements `Resource`: where it lives on the backend, which columns
//! and form fields it has, which row actions it offers and who may open its page.
//! The list controller, the accessors in `client::api::resource` and the shared
//! page component are all written against this trait.

pub mod domain;
pub mod finance;
pub mod group;
pub mod server;
pub mod user;

pub use domain::Domains;
pub use finance::{FinanceAccounts, FinanceRow};
pub use group::Groups;
pub use server::Servers;
pub use user::Users;

use serde::{de::DeserializeOwned, Serialize};

use crate::client::{
    api::{gateway::ApiClient, transport::Transport},
    model::{
        form::FieldSpec,
        permission::{Capabilities, PageAccess, RecordOwner},
    },
};

/// Where the update form gets its record from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailSource {
    /// The row already on the current page.
    PageCache,
    /// A fresh `GET /{entity}/{id}`.
    Remote,
}

/// One rendered table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Strong(String),
    Badge { text: String, class: String },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Text cell showing `-` for missing or blank values.
    pub fn optional(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(text) if !text.is_empty() => Cell::Text(text.to_string()),
            _ => Cell::Text("-".to_string()),
        }
    }

    pub fn badge(text: impl Into<String>, class: impl Into<String>) -> Self {
        Cell::Badge {
            text: text.into(),
            class: class.into(),
        }
    }

    /// Badge styled by the lowercased status value.
    pub fn status(status: &str) -> Self {
        Cell::badge(status, format!("status-{}", status.to_lowercase()))
    }
}

#[allow(async_fn_in_trait)]
pub trait Resource: 'static {
    /// Record as the backend returns it.
    type Record: DeserializeOwned + Serialize + Clone + PartialEq + 'static;
    /// Record as the table shows it, possibly augmented.
    type Row: Clone + PartialEq + 'static;

    /// Collection path, e.g. `/servers`.
    const ENDPOINT: &'static str;
    /// Lowercase noun used in messages: "server".
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    const TITLE: &'static str;
    const HEADERS: &'static [&'static str];
    const FIELDS: &'static [FieldSpec];
    const CAPABILITIES: Capabilities;
    const DETAIL_SOURCE: DetailSource;
    const ACCESS: PageAccess;

    fn id(record: &Self::Record) -> i64;

    fn record(row: &Self::Row) -> &Self::Record;

    fn cells(row: &Self::Row) -> Vec<Cell>;

    /// The panel account a row stands for, when rows are users.
    fn owner(_record: &Self::Record) -> Option<RecordOwner<'_>> {
        None
    }

    /// Fields of the details modal.
    fn details(_record: &Self::Record) -> Vec<DetailField> {
        Vec::new()
    }

    /// Builds table rows from a fetched page.
    async fn enrich<T: Transport>(api: &ApiClient<T>, records: Vec<Self::Record>)
        -> Vec<Self::Row>;
}

/// One labelled value of the details modal.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    /// Offers a copy-to-clipboard button for the value.
    pub copyable: bool,
    /// Shown masked; copying still yields the real value.
    pub secret: bool,
}

impl DetailField {
    pub fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            copyable: false,
            secret: false,
        }
    }

    pub fn copyable(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            copyable: true,
            ..Self::text(label, value)
        }
    }

    pub fn secret(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            copyable: true,
            secret: true,
            ..Self::text(label, value)
        }
    }

    /// What the modal prints for the value: `-` when empty, dots when secret.
    pub fn display(&self) -> String {
        if self.value.is_empty() {
            "-".to_string()
        } else if self.secret {
            "\u{2022}".repeat(8)
        } else {
            self.value.clone()
        }
    }
}

/// Capitalizes the first letter of an entity noun for messages.
pub fn capitalized(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
