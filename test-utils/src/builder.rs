use serde_json::Value;

use crate::{
    context::TestContext, error::TestError, factory, TEST_TOKEN, TOKEN_KEY, USER_KEY,
};

/// Builder for creating test contexts with a scripted backend and seeded session.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .logged_in_as("alice", "Super Admin")
///     .with_response("GET", "/check-auth", 200, factory::auth::check_auth("alice", "Super Admin"))
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Scripted responses as `(method, path, status, body)`.
    ///
    /// Registered on the backend in insertion order during `build()`.
    responses: Vec<(String, String, u16, Value)>,

    /// Session user to seed into storage, as `(username, role)`.
    user: Option<(String, String)>,
}

impl TestBuilder {
    /// Creates a new builder with no responses and no stored session.
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            user: None,
        }
    }

    /// Seeds storage with `TEST_TOKEN` and a cached user, as if a previous login succeeded.
    ///
    /// # Arguments
    /// - `username` - Username of the cached user
    /// - `role` - Role name of the cached user, e.g. `"Admin 2L"`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn logged_in_as(mut self, username: &str, role: &str) -> Self {
        self.user = Some((username.to_string(), role.to_string()));
        self
    }

    /// Adds a scripted response to the backend.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `path` - Path below `BASE_URL`, starting with `/`
    /// - `status` - Status code to answer with
    /// - `body` - JSON body (`Value::Null` for an empty body)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_response(mut self, method: &str, path: &str, status: u16, body: Value) -> Self {
        self.responses
            .push((method.to_string(), path.to_string(), status, body));
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Backend scripted and storage seeded
    /// - `Err(TestError::InvalidPath)` - A response path did not start with `/`
    /// - `Err(TestError::Serialize)` - Failed to serialize the seeded user
    pub fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        for (method, path, status, body) in self.responses {
            if !path.starts_with('/') {
                return Err(TestError::InvalidPath(path));
            }
            context.backend.respond(&method, &path, status, body);
        }

        if let Some((username, role)) = self.user {
            let user = factory::auth::session_user(&username, &role);
            context
                .storage
                .push((TOKEN_KEY.to_string(), TEST_TOKEN.to_string()));
            context
                .storage
                .push((USER_KEY.to_string(), serde_json::to_string(&user)?));
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
