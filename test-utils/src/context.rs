use crate::mock::MockBackend;

/// Test context containing the scripted backend and the seeded client storage.
///
/// The client under test is assembled from these two pieces: `storage` seeds the persisted
/// session store, and `backend` is wrapped in a transport that answers every HTTP call.
pub struct TestContext {
    /// Scripted backend answering and recording every request.
    pub backend: MockBackend,

    /// Key/value pairs to preload into the client's persistent storage.
    ///
    /// Empty unless the builder was asked for a logged-in session.
    pub storage: Vec<(String, String)>,
}

impl TestContext {
    /// Creates a context with an empty backend and no stored session.
    pub fn new() -> Self {
        Self {
            backend: MockBackend::new(),
            storage: Vec::new(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
