pub mod auth;
pub mod gateway;
pub mod resource;
pub mod settings;
pub mod transport;

#[cfg(test)]
pub(crate) mod test;

pub use gateway::{ApiClient, RequestOptions};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

/// Transport used by the running app.
#[cfg(feature = "web")]
pub type AppTransport = transport::BrowserTransport;

#[cfg(all(feature = "desktop", not(feature = "web")))]
pub type AppTransport = transport::NativeTransport;

#[cfg(any(feature = "web", feature = "desktop"))]
pub type AppClient = ApiClient<AppTransport>;
