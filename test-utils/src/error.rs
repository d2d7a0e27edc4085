use thiserror::Error;

/// Errors that can occur while building a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// A scripted route was registered with a path the mock backend can never match.
    ///
    /// Paths are matched against the request path below `BASE_URL` and must start with `/`.
    #[error("Invalid mock route path: {0}")]
    InvalidPath(String),

    /// Failed to serialize a seeded storage value.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
