use std::time::Duration;

use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, error::TestError, factory, mock::MockBackend};

use crate::client::{
    api::{
        gateway::ApiClient,
        test::{client, slow_client, SlowBackend},
    },
    config::Config,
    controller::{
        list::{ListController, ModalView, TableBody},
        settings::SettingsController,
    },
    model::{cache::Cache, debounce::Sleep, permission::RowAction},
    resource::Resource,
};

mod list;
mod settings;

/// Sleep that only yields once, so debounced calls race deterministically.
struct YieldSleep;

impl Sleep for YieldSleep {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}

fn controller<R: Resource>(api: ApiClient<MockBackend>) -> ListController<R, MockBackend> {
    ListController::new(api, &Config::default())
}

fn slow_controller<R: Resource>(api: ApiClient<SlowBackend>) -> ListController<R, SlowBackend> {
    ListController::new(api, &Config::default())
}
