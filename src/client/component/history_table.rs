use dioxus::prelude::*;

use crate::client::model::{cache::Cache, history::HistoryRow};

#[component]
pub fn HistoryTable(entries: Cache<Vec<HistoryRow>>) -> Element {
    rsx! {
        match entries {
            Cache::NotFetched | Cache::Loading => rsx! {
                p { class: "loading-row", "Loading..." }
            },
            Cache::Error(message) => rsx! {
                p { class: "empty-state", "{message}" }
            },
            Cache::Fetched(rows) if rows.is_empty() => rsx! {
                p { class: "empty-state", "No history" }
            },
            Cache::Fetched(rows) => rsx! {
                table {
                    thead {
                        tr {
                            th { "Date" }
                            th { "User" }
                            th { "Action" }
                            th { "Changes" }
                        }
                    }
                    tbody {
                        for row in rows {
                            {
                                let changes = row.changes.describe();
                                rsx! {
                                    tr {
                                        td { "{row.timestamp}" }
                                        td { "{row.actor}" }
                                        td { "{row.action}" }
                                        td { "{changes}" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
