use std::cell::RefCell;

use serde_json::{json, Value};

use crate::BASE_URL;

/// A request captured by the mock backend.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    /// HTTP method in upper case (`GET`, `POST`, ...).
    pub method: String,
    /// Path below `BASE_URL`, without the query string.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Headers in the order they were sent.
    pub headers: Vec<(String, String)>,
    /// Request body, if any.
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Returns the value of a header, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Parses the request body as JSON.
    ///
    /// # Returns
    /// - `Some(Value)` - Body was present and valid JSON
    /// - `None` - No body, or the body was not JSON
    pub fn json(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

#[derive(Clone, Debug)]
struct MockRoute {
    method: String,
    path: String,
    status: u16,
    body: String,
}

/// Scripted REST backend.
///
/// Routes are matched on method and path (the query string is ignored). When more than one
/// route matches, the one registered last wins, so tests can override a default response.
/// Unmatched requests receive `404 {"detail": "Not Found"}`. Every request is recorded,
/// matched or not.
#[derive(Debug, Default)]
pub struct MockBackend {
    routes: RefCell<Vec<MockRoute>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a JSON response for `method` + `path`.
    ///
    /// # Arguments
    /// - `method` - HTTP method, compared case-insensitively
    /// - `path` - Path below `BASE_URL`, e.g. `/servers/1`
    /// - `status` - Status code to answer with
    /// - `body` - JSON body; `Value::Null` produces an empty body
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        let body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };

        self.routes.borrow_mut().push(MockRoute {
            method: method.to_uppercase(),
            path: path.to_string(),
            status,
            body,
        });
    }

    /// Handles one request and returns the scripted `(status, body)` pair.
    pub fn handle(
        &self,
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: Option<&str>,
    ) -> (u16, String) {
        let (path, query) = split_url(url);

        self.requests.borrow_mut().push(RecordedRequest {
            method: method.to_uppercase(),
            path: path.clone(),
            query,
            headers: headers.to_vec(),
            body: body.map(str::to_string),
        });

        self.routes
            .borrow()
            .iter()
            .rev()
            .find(|route| route.method.eq_ignore_ascii_case(method) && route.path == path)
            .map(|route| (route.status, route.body.clone()))
            .unwrap_or_else(|| (404, json!({ "detail": "Not Found" }).to_string()))
    }

    /// Returns every recorded request in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    /// Returns the recorded requests sent to `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.path == path)
            .cloned()
            .collect()
    }

    /// Returns the most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.borrow().last().cloned()
    }
}

/// Splits an absolute request URL into the path below `BASE_URL` and the query string.
fn split_url(url: &str) -> (String, Option<String>) {
    let base_path = url::Url::parse(BASE_URL)
        .map(|base| base.path().trim_end_matches('/').to_string())
        .unwrap_or_default();

    match url::Url::parse(url) {
        Ok(parsed) => {
            let path = parsed
                .path()
                .strip_prefix(base_path.as_str())
                .unwrap_or(parsed.path())
                .to_string();
            (path, parsed.query().map(str::to_string))
        }
        Err(_) => match url.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (url.to_string(), None),
        },
    }
}
