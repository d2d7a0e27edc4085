use std::time::Duration;

use dioxus::prelude::*;

use crate::client::{
    app::AppSleep,
    constant::NOTICE_TIMEOUT_MS,
    model::{debounce::Sleep, notice::Notice},
};

/// Toast for the page's current notice. Closes on ✕, or by itself once
/// `NOTICE_TIMEOUT_MS` has passed, reporting the id it was started for.
#[component]
pub fn NoticeToast(
    notice: Option<Notice>,
    on_dismiss: EventHandler<()>,
    on_expire: EventHandler<u64>,
) -> Element {
    let id = notice.as_ref().map(|notice| notice.id);
    use_effect(use_reactive!(|id| {
        if let Some(id) = id {
            spawn(async move {
                AppSleep::default()
                    .sleep(Duration::from_millis(NOTICE_TIMEOUT_MS))
                    .await;
                on_expire.call(id);
            });
        }
    }));

    let Some(notice) = notice else {
        return rsx! {};
    };
    let class = if notice.is_error() { "error" } else { "success" };

    rsx!(
        div {
            class: "notification {class}",
            role: "status",
            span { "{notice.message}" }
            button {
                class: "btn",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    )
}
