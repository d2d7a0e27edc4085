use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCheck, FaCopy},
    Icon,
};
use dioxus_logger::tracing;

use crate::client::{
    app::AppSleep,
    model::{clipboard::copy_script, debounce::Sleep},
};

const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Copies `text` to the clipboard; shows a check mark for a moment afterwards.
#[component]
pub fn CopyButton(text: String) -> Element {
    let mut copied = use_signal(|| false);

    rsx!(
        button {
            r#type: "button",
            class: "btn btn-sm copy-btn",
            title: "Copy",
            onclick: move |_| {
                let script = copy_script(&text);
                spawn(async move {
                    if let Err(err) = document::eval(&script).await {
                        tracing::warn!("Failed to copy to clipboard: {:?}", err);
                        return;
                    }
                    copied.set(true);
                    AppSleep::default().sleep(COPIED_FEEDBACK).await;
                    copied.set(false);
                });
            },
            if copied() {
                Icon { width: 14, height: 14, icon: FaCheck }
            } else {
                Icon { width: 14, height: 14, icon: FaCopy }
            }
        }
    )
}
