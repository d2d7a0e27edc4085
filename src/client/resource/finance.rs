use dioxus_logger::tracing;
use futures_util::future::join_all;

use crate::{
    client::{
        api::{gateway::ApiClient, transport::Transport},
        model::{
            error::ClientError,
            form::{FieldKind, FieldSpec},
            permission::{Capabilities, PageAccess},
        },
        resource::{Cell, DetailSource, Resource},
    },
    model::{
        finance::{FinanceAccountDto, ACCOUNT_STATUSES, CURRENCIES},
        role::Role,
        server::{group_label, ServerDto, ServerStatus},
    },
};

/// A finance account together with the state of the server it pays for.
#[derive(Clone, Debug, PartialEq)]
pub struct FinanceRow {
    pub account: FinanceAccountDto,
    pub server_status: ServerStatus,
    pub server_group: Option<i64>,
}

pub struct FinanceAccounts;

impl Resource for FinanceAccounts {
    type Record = FinanceAccountDto;
    type Row = FinanceRow;

    const ENDPOINT: &'static str = "/finance";
    const SINGULAR: &'static str = "finance record";
    const PLURAL: &'static str = "finance records";
    const TITLE: &'static str = "Finance";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Server ID",
        "Server Status",
        "Price",
        "Account Status",
        "Payment Date",
        "Group",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("server_id", "Server ID", FieldKind::Integer).required(),
        FieldSpec::new(
            "account_status",
            "Account Status",
            FieldKind::Choice(ACCOUNT_STATUSES),
        ),
        FieldSpec::new("price", "Price", FieldKind::Decimal).required(),
        FieldSpec::new("currency", "Currency", FieldKind::Choice(CURRENCIES)),
        FieldSpec::new("payment_date", "Payment Date", FieldKind::Date).required(),
        FieldSpec::new("group_id", "Group ID", FieldKind::Integer),
    ];
    const CAPABILITIES: Capabilities = Capabilities {
        history: true,
        details: false,
        delete: false,
    };
    const DETAIL_SOURCE: DetailSource = DetailSource::PageCache;
    const ACCESS: PageAccess = PageAccess::AtLeastOrExactly(Role::Admin2L, Role::ServiceManager);

    fn id(record: &FinanceAccountDto) -> i64 {
        record.id
    }

    fn record(row: &FinanceRow) -> &FinanceAccountDto {
        &row.account
    }

    fn cells(row: &FinanceRow) -> Vec<Cell> {
        let account = &row.account;
        let price = match account.price {
            Some(price) if price != 0.0 => format!("{:.2} {}", price, account.currency),
            _ => "-".to_string(),
        };
        let payment_date = account
            .payment_date
            .as_deref()
            .and_then(|date| date.get(..10))
            .unwrap_or("-");

        vec![
            Cell::Strong(account.id.to_string()),
            Cell::text(account.server_id.to_string()),
            Cell::badge(row.server_status.label(), row.server_status.badge()),
            Cell::text(price),
            Cell::status(&account.account_status),
            Cell::text(payment_date),
            Cell::text(group_label(row.server_group)),
        ]
    }

    /// Looks up every account's server concurrently. A failed lookup marks the
    /// server status unknown instead of failing the page.
    ///
    /// Lookups still pending once the session has ended are skipped.
    async fn enrich<T: Transport>(
        api: &ApiClient<T>,
        records: Vec<FinanceAccountDto>,
    ) -> Vec<FinanceRow> {
        let lookups = records.iter().map(|account| {
            let endpoint = format!("/servers/{}", account.server_id);
            async move {
                if !api.session().is_authenticated() {
                    return Err(ClientError::Unauthorized);
                }
                api.get::<ServerDto>(&endpoint).await
            }
        });
        let servers = join_all(lookups).await;

        records
            .into_iter()
            .zip(servers)
            .map(|(account, server)| match server {
                Ok(server) => FinanceRow {
                    account,
                    server_status: server.status,
                    server_group: server.group_id,
                },
                Err(err) => {
                    tracing::warn!(
                        "Failed to look up server {} for finance record {}: {}",
                        account.server_id,
                        account.id,
                        err
                    );
                    FinanceRow {
                        account,
                        server_status: ServerStatus::Unknown,
                        server_group: None,
                    }
                }
            })
            .collect()
    }
}
