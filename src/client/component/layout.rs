use dioxus::prelude::*;

use crate::client::{
    app::Services,
    component::Sidebar,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    let services = use_context::<Services>();
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    // Every logout, including one forced by a 401, lands back on the login page.
    use_hook(move || {
        services.session().set_logout_listener(move || {
            let mut auth_context = auth_context;
            auth_context.set(AuthState::NotLoggedIn);
            nav.push(Route::Login {});
        });
    });

    let logged_in = auth_context.read().is_authenticated();

    rsx!(div {
        class: "layout",
        if logged_in {
            Sidebar {}
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    })
}
