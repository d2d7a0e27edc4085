use serde_json::Value;

/// Script that writes `text` to the system clipboard and resolves once it has.
///
/// The text is embedded as a JSON string literal, which JavaScript parses as-is.
pub fn copy_script(text: &str) -> String {
    format!(
        "await navigator.clipboard.writeText({}); return true;",
        Value::from(text)
    )
}
