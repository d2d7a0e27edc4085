use dioxus::prelude::*;

use crate::client::{
    component::RequiresAccess,
    resource::{self, Resource},
    route::list::{list_page, use_list_controller},
};

#[component]
pub fn Servers() -> Element {
    list_page(use_list_controller::<resource::Servers>())
}

#[component]
pub fn Domains() -> Element {
    list_page(use_list_controller::<resource::Domains>())
}

#[component]
pub fn Groups() -> Element {
    list_page(use_list_controller::<resource::Groups>())
}

#[component]
pub fn Users() -> Element {
    rsx! {
        RequiresAccess { access: resource::Users::ACCESS, UserList {} }
    }
}

#[component]
fn UserList() -> Element {
    list_page(use_list_controller::<resource::Users>())
}

#[component]
pub fn Finance() -> Element {
    rsx! {
        RequiresAccess { access: resource::FinanceAccounts::ACCESS, FinanceList {} }
    }
}

#[component]
fn FinanceList() -> Element {
    list_page(use_list_controller::<resource::FinanceAccounts>())
}
