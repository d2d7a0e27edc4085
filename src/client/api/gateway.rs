use std::rc::Rc;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    client::{
        api::transport::{HttpRequest, HttpResponse, Method, Transport},
        model::{error::ClientError, session::Session},
    },
    model::api::ErrorDto,
};

const AUTHORIZATION: &str = "Authorization";
const GENERIC_FAILURE: &str = "Request failed";

/// Method, extra headers and body of one call.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    pub fn post(payload: &impl Serialize) -> Result<Self, ClientError> {
        Self::new(Method::Post).json(payload)
    }

    pub fn put(payload: &impl Serialize) -> Result<Self, ClientError> {
        Self::new(Method::Put).json(payload)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    fn json(mut self, payload: &impl Serialize) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self)
    }
}

/// Authenticated client for the panel's REST API.
///
/// Cheap to clone; clones share the transport and the session.
pub struct ApiClient<T> {
    transport: Rc<T>,
    base_url: String,
    session: Session,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            base_url: self.base_url.clone(),
            session: self.session.clone(),
        }
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport) && self.session == other.session
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, session: Session) -> Self {
        Self {
            transport: Rc::new(transport),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends an authenticated call and decodes the JSON answer.
    ///
    /// # Returns
    /// - `Ok(R)` - 2xx; a 204 decodes `R` from `null`
    /// - `Err(ClientError::Unauthorized)` - 401; the session that sent the request
    ///   was logged out first, unless another request already ended it
    /// - `Err(ClientError::Request)` - Any other non-2xx, with the backend's `detail`
    /// - `Err(ClientError::Transport)` / `Err(ClientError::Decode)` - Network or body failure
    pub async fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ClientError> {
        let token = self.session.token();
        let headers = merge_headers(token.as_deref(), options.headers);
        let request = HttpRequest {
            method: options.method,
            url: self.url(endpoint),
            headers,
            body: options.body,
        };

        let response = self.send(request).await?;

        if response.status == 401 {
            // Only the first rejection of a token ends the session.
            if token.is_some() && self.session.token() == token {
                tracing::warn!("{} answered 401, ending session", endpoint);
                self.session.logout();
            } else {
                tracing::debug!("{} answered 401 for an already ended session", endpoint);
            }
            return Err(ClientError::Unauthorized);
        }

        parse_response(response)
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ClientError> {
        self.request(endpoint, RequestOptions::get()).await
    }

    pub async fn post<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &impl Serialize,
    ) -> Result<R, ClientError> {
        self.request(endpoint, RequestOptions::post(payload)?).await
    }

    pub async fn put<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &impl Serialize,
    ) -> Result<R, ClientError> {
        self.request(endpoint, RequestOptions::put(payload)?).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ClientError> {
        self.request(endpoint, RequestOptions::delete()).await
    }

    /// Sends a request as-is, without session handling. Used by the auth flows,
    /// which manage tokens themselves.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        tracing::debug!("{} {}", request.method.as_str(), request.url);
        self.transport.send(request).await
    }
}

/// JSON content type and bearer token, overlaid by the caller's headers.
///
/// A caller-supplied `Authorization` header is dropped so the session token always wins.
pub fn merge_headers(
    token: Option<&str>,
    extra: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    if let Some(token) = token {
        headers.push((AUTHORIZATION.to_string(), format!("Bearer {}", token)));
    }

    for (name, value) in extra {
        if name.eq_ignore_ascii_case(AUTHORIZATION) {
            continue;
        }
        match headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(header) => header.1 = value,
            None => headers.push((name, value)),
        }
    }

    headers
}

/// Turns a non-401 response into the decoded body or a `Request` error.
pub fn parse_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ClientError> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorDto>(&response.body)
            .ok()
            .and_then(|error| error.message().map(str::to_string))
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        return Err(ClientError::Request {
            status: response.status,
            message,
        });
    }

    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }

    Ok(serde_json::from_str(&response.body)?)
}
