use dioxus_logger::tracing;

use crate::{
    client::{
        api::{
            gateway::{merge_headers, ApiClient},
            transport::{HttpRequest, Method, Transport},
        },
        model::{error::ClientError, session::SessionUser},
    },
    model::auth::{CheckAuthDto, LoginRequestDto, TokenDto},
};

/// Exchanges credentials for a token, then fetches the matching profile.
///
/// The session is only written once both steps succeed; a failure at either step
/// leaves it untouched.
///
/// # Returns
/// - `Ok(SessionUser)` - Logged in, token and user persisted
/// - `Err(ClientError::Auth)` - Credentials rejected or no profile for the new token
/// - `Err(ClientError::Transport)` - Network failure
pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    username: &str,
    password: &str,
) -> Result<SessionUser, ClientError> {
    let payload = LoginRequestDto {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = api
        .send(HttpRequest {
            method: Method::Post,
            url: api.url("/login"),
            headers: merge_headers(None, Vec::new()),
            body: Some(serde_json::to_string(&payload)?),
        })
        .await?;

    if !response.is_success() {
        tracing::warn!("Login rejected for {} with status {}", username, response.status);
        return Err(ClientError::Auth("Invalid credentials".to_string()));
    }

    let token = serde_json::from_str::<TokenDto>(&response.body)
        .map_err(|_| ClientError::Auth("Invalid credentials".to_string()))?
        .access_token;

    let user = fetch_user(api, &token)
        .await
        .ok_or_else(|| ClientError::Auth("Failed to get user info after login".to_string()))?;

    api.session().establish(token, user.clone());
    tracing::info!("Logged in as {}", user.username);

    Ok(user)
}

/// Re-validates the stored session against the backend.
///
/// Any failure, including having no session to begin with, ends the session.
///
/// # Returns
/// - `true` - Token still valid; the cached user was refreshed
/// - `false` - Session was logged out
pub async fn check_auth<T: Transport>(api: &ApiClient<T>) -> bool {
    let session = api.session();
    let Some(token) = session.token().filter(|_| session.is_authenticated()) else {
        session.logout();
        return false;
    };

    match fetch_user(api, &token).await {
        Some(user) => {
            session.refresh_user(user);
            true
        }
        None => {
            tracing::warn!("Stored session was rejected, logging out");
            session.logout();
            false
        }
    }
}

pub fn logout<T: Transport>(api: &ApiClient<T>) {
    api.session().logout();
}

/// `GET /check-auth` with an explicit token. Every failure reads as "no user".
async fn fetch_user<T: Transport>(api: &ApiClient<T>, token: &str) -> Option<SessionUser> {
    let request = HttpRequest {
        method: Method::Get,
        url: api.url("/check-auth"),
        headers: merge_headers(Some(token), Vec::new()),
        body: None,
    };

    let response = match api.send(request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("Failed to check authentication: {}", err);
            return None;
        }
    };

    if !response.is_success() {
        return None;
    }

    match serde_json::from_str::<CheckAuthDto>(&response.body) {
        Ok(profile) => Some(SessionUser::new(profile.username, profile.role)),
        Err(err) => {
            tracing::error!("Failed to parse check-auth response: {}", err);
            None
        }
    }
}
