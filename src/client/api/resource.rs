//! Generic CRUD accessors shared by every entity.

use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use crate::{
    client::{
        api::{gateway::ApiClient, transport::Transport},
        model::{error::ClientError, query::PageQuery},
        resource::Resource,
    },
    model::history::HistoryEntryDto,
};

pub async fn list<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    query: &PageQuery,
) -> Result<Vec<R::Record>, ClientError> {
    api.get(&format!("{}?{}", R::ENDPOINT, query.to_query_string()))
        .await
}

pub async fn get<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<R::Record, ClientError> {
    api.get(&format!("{}/{}", R::ENDPOINT, id)).await
}

pub async fn create<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    payload: &Map<String, Value>,
) -> Result<R::Record, ClientError> {
    api.post(R::ENDPOINT, payload).await
}

pub async fn update<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    id: i64,
    payload: &Map<String, Value>,
) -> Result<R::Record, ClientError> {
    api.put(&format!("{}/{}", R::ENDPOINT, id), payload).await
}

/// The response body, if any, is ignored.
pub async fn delete<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<(), ClientError> {
    api.delete::<IgnoredAny>(&format!("{}/{}", R::ENDPOINT, id))
        .await
        .map(|_| ())
}

pub async fn history<R: Resource, T: Transport>(
    api: &ApiClient<T>,
    id: i64,
) -> Result<Vec<HistoryEntryDto>, ClientError> {
    api.get(&format!("{}/{}/history", R::ENDPOINT, id)).await
}
