//! Factory methods for creating backend payloads.
//!
//! Each entity has its own module with a `Factory` builder for customization and short
//! convenience functions for the common cases. Every factory produces `serde_json::Value`
//! shaped exactly like the backend's responses, so they can be scripted directly into
//! `MockBackend`.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let servers = factory::server::list(3);
//! let abused = factory::server::ServerFactory::new(7).status("abuse").build();
//! let history = factory::history::list(vec![factory::history::created(1)]);
//! ```
//!
//! # Available Factories
//!
//! - `auth` - Login token, check-auth and cached session user payloads
//! - `server` - Server records
//! - `domain` - Domain records
//! - `user` - User records
//! - `finance` - Finance account records
//! - `group` - Group records
//! - `history` - History entries
//! - `settings` - Profile and settings payloads

pub mod auth;
pub mod domain;
pub mod finance;
pub mod group;
pub mod history;
pub mod server;
pub mod settings;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use domain::create_domain;
pub use finance::create_account;
pub use group::create_group;
pub use server::create_server;
pub use user::create_user;
