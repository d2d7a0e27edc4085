use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend on any non-2xx response.
///
/// `detail` is usually a string, but request validation failures carry a list of
/// objects instead, so it is kept as raw JSON.
#[derive(Serialize, Deserialize, Default)]
pub struct ErrorDto {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDto {
    /// The human-readable detail message, if the backend sent one as a string.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
    }
}
