//! Inventory Panel Test Utils
//!
//! Provides shared testing utilities for the inventory panel client. The client talks to its
//! backend through a transport abstraction, so tests replace the network with a scripted
//! in-memory backend and seed the persisted session state directly.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the mock backend and seeded storage
//! - **MockBackend**: Scripted REST backend that records every request it receives
//! - **factory**: JSON payload factories for each backend entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_servers() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .logged_in_as("alice", "Admin 2L")
//!         .with_response("GET", "/servers", 200, factory::server::list(3))
//!         .build()?;
//!
//!     // Hand `test.backend` and `test.storage` to the client under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod mock;

/// Base URL every test client is configured with.
pub const BASE_URL: &str = "http://panel.test/api";

/// Bearer token seeded by `TestBuilder::logged_in_as` and issued by `factory::auth::token`.
pub const TEST_TOKEN: &str = "test-token";

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "cn_token";

/// Storage key holding the cached user profile.
pub const USER_KEY: &str = "cn_user";
