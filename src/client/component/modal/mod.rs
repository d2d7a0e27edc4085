pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

#[component]
pub fn Modal(
    open: bool,
    title: String,
    prevent_close: bool,
    on_close: EventHandler<()>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    // Focus modal when it opens
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|open| {
        if open {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    }));

    rsx!(
        div {
            class: if open { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    on_close.call(());
                }
            },
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        on_close.call(());
                    }
                },
            }
            div {
                class: "modal-box {class}",
                div {
                    class: "modal-header",
                    h3 { "{title}" }
                    if !prevent_close {
                        button {
                            class: "btn",
                            onclick: move |_| on_close.call(()),
                            "✕"
                        }
                    }
                }
                div {
                    {children}
                }
            }
        }
    )
}
