use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaDollarSign, FaGear, FaGlobe, FaLayerGroup, FaRightFromBracket, FaServer, FaUsers,
    },
    Icon,
};

use crate::client::{
    app::Services,
    constant::SITE_NAME,
    model::auth::AuthContext,
    resource::{FinanceAccounts, Resource, Users},
    router::Route,
};

#[component]
pub fn Sidebar() -> Element {
    let services = use_context::<Services>();
    let auth_context = use_context::<AuthContext>();

    let (can_see_users, can_see_finance, user) = {
        let state = auth_context.read();
        (
            state.can_access(Users::ACCESS),
            state.can_access(FinanceAccounts::ACCESS),
            state.user().cloned(),
        )
    };

    rsx!(nav {
        class: "sidebar",
        div {
            class: "brand",
            {SITE_NAME}
        }
        Link {
            to: Route::Servers {},
            active_class: "active",
            Icon { width: 16, height: 16, icon: FaServer }
            span { "Servers" }
        }
        Link {
            to: Route::Domains {},
            active_class: "active",
            Icon { width: 16, height: 16, icon: FaGlobe }
            span { "Domains" }
        }
        if can_see_users {
            Link {
                to: Route::Users {},
                active_class: "active",
                Icon { width: 16, height: 16, icon: FaUsers }
                span { "Users" }
            }
        }
        if can_see_finance {
            Link {
                to: Route::Finance {},
                active_class: "active",
                Icon { width: 16, height: 16, icon: FaDollarSign }
                span { "Finance" }
            }
        }
        Link {
            to: Route::Groups {},
            active_class: "active",
            Icon { width: 16, height: 16, icon: FaLayerGroup }
            span { "Groups" }
        }
        div { class: "spacer" }
        if let Some(user) = user {
            div {
                class: "user-info",
                span { class: "username", "{user.username}" }
                span { class: "role", "{user.role}" }
            }
        }
        Link {
            to: Route::Settings {},
            active_class: "active",
            Icon { width: 16, height: 16, icon: FaGear }
            span { "Settings" }
        }
        a {
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                services.session().logout();
            },
            Icon { width: 16, height: 16, icon: FaRightFromBracket }
            span { "Logout" }
        }
    })
}
