use std::{cell::Cell, rc::Rc};

use serde::de::IgnoredAny;
use serde_json::Value;

use super::*;

/// Tests that an authenticated request carries the JSON and bearer headers.
///
/// Expected: `Content-Type: application/json` and `Authorization: Bearer <token>`
#[tokio::test]
async fn sends_default_headers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/servers", 200, factory::server::list(1))
        .build()?;
    let (api, _) = client(test);

    let servers: Value = api.get("/servers").await.unwrap();

    assert_eq!(servers.as_array().map(Vec::len), Some(1));
    let request = api.transport().last_request().unwrap();
    assert_eq!(request.header("content-type"), Some("application/json"));
    let bearer = format!("Bearer {}", TEST_TOKEN);
    assert_eq!(request.header("authorization"), Some(bearer.as_str()));

    Ok(())
}

/// Tests a request made without a session.
///
/// Expected: no Authorization header at all
#[tokio::test]
async fn omits_authorization_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_response("GET", "/groups", 200, json!([]))
        .build()?;
    let (api, _) = client(test);

    let _: Vec<Value> = api.get("/groups").await.unwrap();

    assert!(api.transport().last_request().unwrap().header("Authorization").is_none());

    Ok(())
}

/// Tests merging caller headers over the defaults.
///
/// Verifies a caller header replaces the default case-insensitively and a caller
/// `Authorization` header never displaces the session token.
///
/// Expected: caller content type, session bearer token
#[test]
fn caller_headers_override_defaults_except_authorization() {
    let headers = merge_headers(
        Some("abc"),
        vec![
            ("content-type".to_string(), "text/plain".to_string()),
            ("authorization".to_string(), "Bearer forged".to_string()),
            ("X-Trace".to_string(), "1".to_string()),
        ],
    );

    assert_eq!(
        headers,
        vec![
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("Authorization".to_string(), "Bearer abc".to_string()),
            ("X-Trace".to_string(), "1".to_string()),
        ]
    );
}

/// Tests the path and body of a JSON request built from options.
///
/// Expected: PUT to the full URL with the serialized payload
#[tokio::test]
async fn request_sends_json_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("PUT", "/groups/4", 200, factory::group::create_group(4))
        .build()?;
    let (api, _) = client(test);

    let options = RequestOptions::put(&json!({ "title": "Ops" }))
        .unwrap()
        .header("X-Request", "1");
    let _: Value = api.request("/groups/4", options).await.unwrap();

    let request = api.transport().last_request().unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/groups/4");
    assert_eq!(request.json(), Some(json!({ "title": "Ops" })));
    assert_eq!(request.header("x-request"), Some("1"));

    Ok(())
}

/// Tests the handling of a 401 answer.
///
/// Verifies the session is cleared, the logout listener runs once and the caller
/// gets `Unauthorized`.
///
/// Expected: logged out, storage emptied, listener called
#[tokio::test]
async fn unauthorized_logs_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/users", 401, factory::auth::detail("Not authenticated"))
        .build()?;
    let (api, storage) = client(test);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    api.session()
        .set_logout_listener(move || counter.set(counter.get() + 1));

    let result: Result<Value, _> = api.get("/users").await;

    assert_eq!(result, Err(ClientError::Unauthorized));
    assert!(!api.session().is_authenticated());
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
    assert_eq!(calls.get(), 1);

    Ok(())
}

/// Tests several requests rejected with the same expired token.
///
/// Verifies only the first 401 ends the session; the others still fail with
/// `Unauthorized`.
///
/// Expected: one logout notification, every caller gets `Unauthorized`
#[tokio::test]
async fn concurrent_unauthorized_logs_out_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/users", 401, factory::auth::detail("Not authenticated"))
        .with_response("GET", "/servers", 401, factory::auth::detail("Not authenticated"))
        .build()?;
    let (api, _) = slow_client(test, vec!["/users", "/servers"]);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    api.session()
        .set_logout_listener(move || counter.set(counter.get() + 1));

    let (users, servers, again) = futures_util::join!(
        api.get::<Value>("/users"),
        api.get::<Value>("/servers"),
        api.get::<Value>("/users"),
    );

    assert_eq!(users, Err(ClientError::Unauthorized));
    assert_eq!(servers, Err(ClientError::Unauthorized));
    assert_eq!(again, Err(ClientError::Unauthorized));
    assert_eq!(api.transport().backend().requests().len(), 3);
    assert!(!api.session().is_authenticated());
    assert_eq!(calls.get(), 1);

    Ok(())
}

/// Tests that other errors leave the session alone and surface the backend detail.
///
/// Expected: `Request { status: 400, message: detail }`, still logged in
#[tokio::test]
async fn error_detail_is_surfaced() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("POST", "/servers", 400, factory::auth::detail("IP already exists"))
        .build()?;
    let (api, _) = client(test);

    let result: Result<Value, _> = api.post("/servers", &json!({ "ip_address": "1.1.1.1" })).await;

    assert_eq!(
        result,
        Err(ClientError::Request {
            status: 400,
            message: "IP already exists".to_string()
        })
    );
    assert!(api.session().is_authenticated());

    Ok(())
}

/// Tests error bodies without a readable detail.
///
/// Expected: the generic "Request failed" message
#[tokio::test]
async fn missing_detail_falls_back() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/domains", 500, Value::Null)
        .with_response(
            "GET",
            "/groups",
            422,
            json!({ "detail": [{ "loc": ["body"], "msg": "field required" }] }),
        )
        .build()?;
    let (api, _) = client(test);

    let empty: Result<Value, _> = api.get("/domains").await;
    let structured: Result<Value, _> = api.get("/groups").await;

    assert_eq!(
        empty,
        Err(ClientError::Request {
            status: 500,
            message: "Request failed".to_string()
        })
    );
    assert_eq!(
        structured,
        Err(ClientError::Request {
            status: 422,
            message: "Request failed".to_string()
        })
    );

    Ok(())
}

/// Tests a 204 answer.
///
/// Expected: success with nothing to decode
#[tokio::test]
async fn no_content_is_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("DELETE", "/domains/3", 204, Value::Null)
        .build()?;
    let (api, _) = client(test);

    let unit: Result<(), _> = api.delete("/domains/3").await;
    let ignored: Result<IgnoredAny, _> = api.delete("/domains/3").await;
    let nothing: Result<Option<Value>, _> = api.delete("/domains/3").await;

    assert!(unit.is_ok());
    assert!(ignored.is_ok());
    assert_eq!(nothing, Ok(None));

    Ok(())
}

/// Tests a 2xx answer with a body that does not match the expected type.
///
/// Expected: `Decode` error
#[tokio::test]
async fn malformed_body_is_decode_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/servers/1", 200, json!({ "unexpected": true }))
        .build()?;
    let (api, _) = client(test);

    let result: Result<crate::model::server::ServerDto, _> = api.get("/servers/1").await;

    assert!(matches!(result, Err(ClientError::Decode(_))));

    Ok(())
}
