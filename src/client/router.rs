use dioxus::prelude::*;

use crate::client::component::{Layout, ProtectedLayout};
use crate::client::route::{
    Domains, Finance, Groups, Login, NotFound, Servers, Settings, Users,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[layout(ProtectedLayout)]
    #[route("/")]
    Servers {},

    #[route("/domains")]
    Domains {},

    #[route("/users")]
    Users {},

    #[route("/finance")]
    Finance {},

    #[route("/groups")]
    Groups {},

    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
