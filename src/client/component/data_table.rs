use dioxus::prelude::*;

use crate::client::{
    controller::{TableBody, TableView},
    model::permission::RowAction,
    resource::Cell,
};

#[component]
pub fn DataTable(table: TableView, on_action: EventHandler<(RowAction, i64)>) -> Element {
    // Headers plus the actions column.
    let columns = table.headers.len() + 1;

    rsx!(
        div {
            class: "table-wrapper",
            table {
                thead {
                    tr {
                        for header in table.headers.iter() {
                            th { "{header}" }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    match table.body {
                        TableBody::Loading => rsx! {
                            tr {
                                td { class: "loading-row", colspan: "{columns}", "Loading..." }
                            }
                        },
                        TableBody::Error(message) | TableBody::Empty(message) => rsx! {
                            tr {
                                td { class: "empty-state", colspan: "{columns}", "{message}" }
                            }
                        },
                        TableBody::Rows(rows) => rsx! {
                            for row in rows {
                                tr {
                                    key: "{row.id}",
                                    for cell in row.cells.iter() {
                                        td { {render_cell(cell)} }
                                    }
                                    td {
                                        div {
                                            class: "row-actions",
                                            for action in row.actions.iter().copied() {
                                                button {
                                                    class: if action == RowAction::Delete { "btn btn-danger" } else { "btn" },
                                                    onclick: move |_| on_action.call((action, row.id)),
                                                    {action.label()}
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
        }
    )
}

fn render_cell(cell: &Cell) -> Element {
    match cell {
        Cell::Text(text) => rsx! { "{text}" },
        Cell::Strong(text) => rsx! { strong { "{text}" } },
        Cell::Badge { text, class } => rsx! {
            span { class: "status-badge {class}", "{text}" }
        },
    }
}
