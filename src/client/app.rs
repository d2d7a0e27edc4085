use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{AppClient, AppTransport},
    config::Config,
    constant::SITE_NAME,
    model::{
        auth::{AuthContext, AuthState},
        session::Session,
    },
    router::Route,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "web")]
pub type AppSleep = crate::client::model::debounce::TimeoutSleep;

#[cfg(all(feature = "desktop", not(feature = "web")))]
pub type AppSleep = crate::client::model::debounce::TokioSleep;

/// Long-lived objects shared by every page.
#[derive(Clone)]
pub struct Services {
    pub api: AppClient,
    pub config: Config,
}

impl Services {
    fn new() -> Self {
        let config = Config::from_env().unwrap_or_else(|err| {
            tracing::error!("{}, falling back to defaults", err);
            Config::default()
        });

        let session = Session::restore(storage());
        let api = AppClient::new(AppTransport::default(), config.api_url.clone(), session);

        Self { api, config }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }
}

#[cfg(feature = "web")]
fn storage() -> crate::client::model::storage::LocalStorage {
    crate::client::model::storage::LocalStorage
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
fn storage() -> crate::client::model::storage::MemoryStorage {
    crate::client::model::storage::MemoryStorage::new()
}

#[component]
pub fn App() -> Element {
    let services = use_context_provider(Services::new);

    // Until check-auth answers, a stored session only counts as "initializing".
    let initial = if services.session().is_authenticated() {
        AuthState::Initializing
    } else {
        AuthState::NotLoggedIn
    };
    use_context_provider(|| AuthContext::new(initial));

    rsx! {
        document::Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Inventory administration panel for servers, domains and billing"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
