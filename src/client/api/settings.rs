use serde_json::{Map, Value};

use crate::{
    client::{
        api::{gateway::ApiClient, transport::Transport},
        model::error::ClientError,
    },
    model::settings::{ProfileDto, SettingsDto},
};

pub async fn get_profile<T: Transport>(api: &ApiClient<T>) -> Result<ProfileDto, ClientError> {
    api.get("/settings/profile").await
}

pub async fn get_settings<T: Transport>(api: &ApiClient<T>) -> Result<SettingsDto, ClientError> {
    api.get("/settings").await
}

/// Sends a sparse update; only the keys present in `payload` change.
pub async fn update_settings<T: Transport>(
    api: &ApiClient<T>,
    payload: &Map<String, Value>,
) -> Result<SettingsDto, ClientError> {
    api.put("/settings", payload).await
}
