use serde_json::json;
use test_utils::{
    builder::TestBuilder, context::TestContext, error::TestError, factory, mock::MockBackend,
    BASE_URL, TEST_TOKEN, TOKEN_KEY, USER_KEY,
};

use crate::client::{
    api::{
        gateway::{merge_headers, ApiClient, RequestOptions},
        transport::{HttpRequest, HttpResponse, Transport},
    },
    model::{
        error::ClientError,
        session::Session,
        storage::{MemoryStorage, SessionStorage},
    },
};

mod gateway;
mod resource;

impl Transport for MockBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let (status, body) = self.handle(
            request.method.as_str(),
            &request.url,
            &request.headers,
            request.body.as_deref(),
        );
        Ok(HttpResponse { status, body })
    }
}

/// Builds a client over the context's scripted backend and seeded storage.
///
/// The returned storage shares its entries with the client's session, so tests can
/// inspect what was persisted.
pub(crate) fn client(context: TestContext) -> (ApiClient<MockBackend>, MemoryStorage) {
    let storage = MemoryStorage::with_entries(context.storage);
    let session = Session::restore(storage.clone());
    (ApiClient::new(context.backend, BASE_URL, session), storage)
}

/// Scripted backend whose answers to chosen paths arrive only after other tasks
/// have had a few turns.
pub(crate) struct SlowBackend {
    backend: MockBackend,
    slow: Vec<&'static str>,
}

impl SlowBackend {
    const DELAY_TURNS: usize = 8;

    pub(crate) fn backend(&self) -> &MockBackend {
        &self.backend
    }
}

impl Transport for SlowBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let path = request.url.split('?').next().unwrap_or_default();
        if self.slow.iter().any(|slow| path.ends_with(slow)) {
            for _ in 0..Self::DELAY_TURNS {
                tokio::task::yield_now().await;
            }
        }
        self.backend.send(request).await
    }
}

/// Like [`client`], but answers to any path ending in one of `slow` are held back.
pub(crate) fn slow_client(
    context: TestContext,
    slow: Vec<&'static str>,
) -> (ApiClient<SlowBackend>, MemoryStorage) {
    let storage = MemoryStorage::with_entries(context.storage);
    let session = Session::restore(storage.clone());
    let transport = SlowBackend {
        backend: context.backend,
        slow,
    };
    (ApiClient::new(transport, BASE_URL, session), storage)
}
