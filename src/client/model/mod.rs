pub mod auth;
pub mod cache;
pub mod clipboard;
pub mod debounce;
pub mod error;
pub mod form;
pub mod history;
pub mod notice;
pub mod permission;
pub mod query;
pub mod session;
pub mod storage;

#[cfg(test)]
mod test;
