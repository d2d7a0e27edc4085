pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod controller;
pub mod model;
pub mod resource;
pub mod route;
pub mod router;

pub use app::App;
