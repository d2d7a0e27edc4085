use dioxus::prelude::*;

use crate::client::{
    api::AppTransport,
    app::Services,
    component::{page::LoadingPage, NoticeToast, Page},
    constant::SITE_NAME,
    controller::SettingsController,
};

type Controller = SettingsController<AppTransport>;

const PROFILE_FIELDS: &[(&str, &str, &str)] = &[
    ("first_name", "First name", "text"),
    ("last_name", "Last name", "text"),
    ("email", "Email", "email"),
    ("phone_number", "Phone", "tel"),
];

const PASSWORD_FIELDS: &[(&str, &str)] = &[
    ("current_password", "Current password"),
    ("new_password", "New password"),
    ("confirm_password", "Confirm new password"),
];

#[component]
pub fn Settings() -> Element {
    let services = use_context::<Services>();
    let revision = use_signal(|| 0u64);

    let controller = use_hook(|| {
        let controller = Controller::new(services.api.clone());
        controller.set_on_change(move || {
            let mut revision = revision;
            revision += 1;
        });

        let loader = controller.clone();
        spawn(async move { loader.load().await });

        controller
    });
    let _ = revision();

    let view = controller.view();
    let Some(profile) = view.profile.data().cloned() else {
        return match view.profile.error() {
            Some(message) => rsx! {
                Page { p { class: "empty-state", "{message}" } }
            },
            None => rsx! { LoadingPage {} },
        };
    };

    let form = view.profile_form.clone();
    let passwords = view.password_form.clone();
    let saving = view.saving;
    let last_login_ip = profile.last_login_ip.clone().unwrap_or_else(|| "-".to_string());

    let on_profile_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move { controller.update_profile().await });
        }
    };
    let on_password_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move { controller.change_password().await });
        }
    };
    let on_toggle = {
        let controller = controller.clone();
        move |evt: FormEvent| controller.set_ip_restricted(evt.checked())
    };
    let on_ips = {
        let controller = controller.clone();
        move |evt: FormEvent| controller.set_profile_field("allowed_ips", evt.value())
    };
    let on_dismiss = {
        let controller = controller.clone();
        move |_: ()| controller.dismiss_notice()
    };
    let on_expire = {
        let controller = controller.clone();
        move |id: u64| controller.expire_notice(id)
    };

    rsx! {
        Title { "Settings | {SITE_NAME}" }
        Page {
            h1 { "Settings" }
            section {
                h2 { "Profile" }
                dl {
                    dt { "Username" }
                    dd { "{profile.username}" }
                    dt { "Role" }
                    dd { "{profile.role}" }
                    dt { "Status" }
                    dd { "{profile.status}" }
                    dt { "Last login IP" }
                    dd { "{last_login_ip}" }
                }
                form {
                    onsubmit: on_profile_submit,
                    for (name, label, input_type) in PROFILE_FIELDS.iter().copied() {
                        {
                            let controller = controller.clone();
                            let value = match name {
                                "first_name" => form.first_name.clone(),
                                "last_name" => form.last_name.clone(),
                                "email" => form.email.clone(),
                                _ => form.phone_number.clone(),
                            };
                            rsx! {
                                label {
                                    class: "form-field",
                                    span { {label} }
                                    input {
                                        name,
                                        r#type: input_type,
                                        value: "{value}",
                                        oninput: move |evt| controller.set_profile_field(name, evt.value()),
                                    }
                                }
                            }
                        }
                    }
                    label {
                        class: "form-field",
                        span { "Restrict login by IP" }
                        input {
                            r#type: "checkbox",
                            checked: form.ip_restricted,
                            onchange: on_toggle,
                        }
                    }
                    label {
                        class: "form-field",
                        span { "Allowed IPs" }
                        input {
                            name: "allowed_ips",
                            placeholder: "Comma separated",
                            disabled: !form.ip_restricted,
                            value: "{form.allowed_ips}",
                            oninput: on_ips,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving,
                        "Save profile"
                    }
                }
            }
            section {
                h2 { "Change password" }
                form {
                    onsubmit: on_password_submit,
                    for (name, label) in PASSWORD_FIELDS.iter().copied() {
                        {
                            let controller = controller.clone();
                            let value = match name {
                                "current_password" => passwords.current_password.clone(),
                                "new_password" => passwords.new_password.clone(),
                                _ => passwords.confirm_password.clone(),
                            };
                            rsx! {
                                label {
                                    class: "form-field",
                                    span { {label} }
                                    input {
                                        name,
                                        r#type: "password",
                                        value: "{value}",
                                        oninput: move |evt| controller.set_password_field(name, evt.value()),
                                    }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving,
                        "Change password"
                    }
                }
            }
        }
        NoticeToast { notice: view.notice, on_dismiss, on_expire }
    }
}
