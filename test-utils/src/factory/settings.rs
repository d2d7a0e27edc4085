use serde_json::{json, Value};

/// `GET /settings/profile` body for `username` with the given allowed IPs.
pub fn profile(username: &str, allowed_ips: &[&str]) -> Value {
    json!({
        "username": username,
        "role": "Admin 2L",
        "email": format!("{}@example.com", username),
        "phone_number": "",
        "status": "active",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "allowed_ips": allowed_ips,
        "last_login_ip": "198.51.100.7"
    })
}

/// `GET /settings` / `PUT /settings` body.
pub fn settings(allowed_ips: &[&str]) -> Value {
    json!({
        "id": 1,
        "user_id": 1,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "phone_number": null,
        "allowed_ips": allowed_ips
    })
}
