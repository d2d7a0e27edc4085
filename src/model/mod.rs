pub mod api;
pub mod auth;
pub mod domain;
pub mod finance;
pub mod group;
pub mod history;
pub mod role;
pub mod server;
pub mod settings;
pub mod user;
