use dioxus::prelude::*;

use crate::client::model::form::{FieldKind, FieldView};

/// Inputs for a resource form, one per visible field.
#[component]
pub fn FormFields(
    fields: Vec<FieldView>,
    error: Option<String>,
    submitting: bool,
    on_input: EventHandler<(&'static str, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            for field in fields {
                {render_field(field, on_input)}
            }
            if let Some(error) = error {
                p { class: "form-error", "{error}" }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: submitting,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: submitting,
                    if submitting { "Saving..." } else { "Save" }
                }
            }
        }
    )
}

fn render_field(field: FieldView, on_input: EventHandler<(&'static str, String)>) -> Element {
    let name = field.spec.name;
    let label = field.spec.label;
    let value = field.value.clone();

    let input = match field.spec.kind {
        FieldKind::Choice(options) => rsx! {
            select {
                name,
                disabled: field.locked,
                onchange: move |evt| on_input.call((name, evt.value())),
                option { value: "", selected: value.is_empty(), "-" }
                for choice in options.iter().copied() {
                    option { value: choice, selected: value == choice, "{choice}" }
                }
            }
        },
        kind => {
            let input_type = match kind {
                FieldKind::Secret => "password",
                FieldKind::Integer | FieldKind::Decimal => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            let step = if kind == FieldKind::Decimal { "0.01" } else { "1" };
            let placeholder = if kind == FieldKind::List { "Comma separated" } else { "" };

            rsx! {
                input {
                    name,
                    r#type: input_type,
                    step,
                    placeholder,
                    value: "{value}",
                    disabled: field.locked,
                    oninput: move |evt| on_input.call((name, evt.value())),
                }
            }
        }
    };

    rsx! {
        label {
            class: "form-field",
            span { "{label}" }
            {input}
        }
    }
}
