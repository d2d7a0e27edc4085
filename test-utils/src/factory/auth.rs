use serde_json::{json, Value};

use crate::TEST_TOKEN;

/// `POST /login` success body carrying `TEST_TOKEN`.
pub fn token() -> Value {
    json!({ "access_token": TEST_TOKEN, "token_type": "bearer" })
}

/// `GET /check-auth` success body.
pub fn check_auth(username: &str, role: &str) -> Value {
    json!({ "authenticated": true, "username": username, "role": role })
}

/// Cached user as the client persists it after a successful check-auth.
pub fn session_user(username: &str, role: &str) -> Value {
    json!({ "id": null, "username": username, "role": role })
}

/// Error body in the backend's `{detail}` shape.
pub fn detail(message: &str) -> Value {
    json!({ "detail": message })
}
