use dioxus::prelude::*;

use crate::client::model::query::PaginationView;

const PAGE_SIZES: &[u64] = &[10, 25, 50, 100];

/// Previous/next controls. The backend reports no total, so "next" stays enabled
/// and an out-of-range page simply renders empty.
#[component]
pub fn Pagination(
    pagination: PaginationView,
    page_size: u64,
    on_page_change: EventHandler<u64>,
    on_page_size_change: EventHandler<u64>,
) -> Element {
    let page = pagination.page;

    rsx!(
        div {
            class: "pagination",
            div {
                span { "Show " }
                select {
                    value: "{page_size}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            on_page_size_change.call(value);
                        }
                    },
                    for size in PAGE_SIZES.iter().copied() {
                        option { value: "{size}", selected: size == page_size, "{size}" }
                    }
                }
                span { " entries" }
            }
            div {
                class: "row-actions",
                button {
                    class: "btn",
                    disabled: !pagination.has_previous,
                    onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                    "«"
                }
                span { "Page {page}" }
                button {
                    class: "btn",
                    onclick: move |_| on_page_change.call(page + 1),
                    "»"
                }
            }
        }
    )
}
