use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::auth::login,
    app::Services,
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let services = use_context::<Services>();
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    // Handle redirect for authenticated users
    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(Route::Servers {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let api = services.api.clone();
        spawn(async move {
            match login(&api, &username(), &password()).await {
                Ok(user) => {
                    password.set(String::new());
                    auth_context.set(AuthState::Authenticated(user));
                }
                Err(err) => {
                    tracing::error!("Login failed: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let authenticated = auth_context.read().is_authenticated();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if authenticated {
            // Render nothing while redirecting
            LoadingPage {}
        } else {
            Page {
                class: "login-page",
                h1 { {SITE_NAME} }
                form {
                    onsubmit: on_submit,
                    label {
                        class: "form-field",
                        span { "Username" }
                        input {
                            name: "username",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    label {
                        class: "form-field",
                        span { "Password" }
                        input {
                            name: "password",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "login-error", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
