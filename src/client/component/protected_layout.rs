use dioxus::prelude::*;

use crate::client::{
    api::auth::check_auth,
    app::Services,
    component::page::{ErrorPage, LoadingPage},
    model::{
        auth::{AuthContext, AuthState},
        permission::PageAccess,
    },
    router::Route,
};

/// Re-validates the stored session once, then renders the nested route.
///
/// Without a session, or when the backend rejects it, the logout listener moves
/// the user to the login page.
#[component]
pub fn ProtectedLayout() -> Element {
    let services = use_context::<Services>();
    let mut auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_hook(move || {
        let api = services.api.clone();
        spawn(async move {
            if check_auth(&api).await {
                auth_context.set(AuthState::from(api.session().user()));
            }
        });
    });

    let state = auth_context.read().clone();

    use_effect(use_reactive!(|state| {
        if state == AuthState::NotLoggedIn {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        match state {
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            // Render nothing while redirecting
            AuthState::Initializing | AuthState::NotLoggedIn => rsx! { LoadingPage {} },
        }
    }
}

/// Renders `children` only for users allowed by `access`.
#[component]
pub fn RequiresAccess(access: PageAccess, children: Element) -> Element {
    let auth_context = use_context::<AuthContext>();
    let allowed = auth_context.read().can_access(access);

    rsx! {
        if allowed {
            {children}
        } else {
            ErrorPage { status: 403, message: "You don't have permission to view this page" }
        }
    }
}
