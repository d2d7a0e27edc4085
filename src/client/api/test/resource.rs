use crate::{
    client::{
        api::{resource, settings},
        model::query::PageQuery,
        resource::{Domains, Servers},
    },
    model::settings::SettingsDto,
};

use super::*;

/// Tests the list request of an entity.
///
/// Expected: `GET /servers?skip=50&limit=50&search=abc`, records decoded
#[tokio::test]
async fn list_sends_paging_and_search() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/servers", 200, factory::server::list(2))
        .build()?;
    let (api, _) = client(test);
    let mut query = PageQuery::new(50);
    query.set_search("abc");
    query.set_page(2);

    let servers = resource::list::<Servers, _>(&api, &query).await.unwrap();

    assert_eq!(servers.len(), 2);
    let request = api.transport().last_request().unwrap();
    assert_eq!(request.path, "/servers");
    assert_eq!(request.query.as_deref(), Some("skip=50&limit=50&search=abc"));

    Ok(())
}

/// Tests that deleting ignores whatever body the backend returns.
///
/// Expected: `Ok(())` for both a JSON body and an empty one
#[tokio::test]
async fn delete_ignores_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("DELETE", "/domains/1", 200, json!({ "message": "deleted" }))
        .with_response("DELETE", "/domains/2", 204, serde_json::Value::Null)
        .build()?;
    let (api, _) = client(test);

    assert_eq!(resource::delete::<Domains, _>(&api, 1).await, Ok(()));
    assert_eq!(resource::delete::<Domains, _>(&api, 2).await, Ok(()));

    Ok(())
}

/// Tests fetching a record's history.
///
/// Expected: `GET /domains/7/history`, entries in backend order
#[tokio::test]
async fn history_hits_nested_endpoint() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response(
            "GET",
            "/domains/7/history",
            200,
            factory::history::list(vec![factory::history::created(1), factory::history::deleted(2)]),
        )
        .build()?;
    let (api, _) = client(test);

    let entries = resource::history::<Domains, _>(&api, 7).await.unwrap();

    assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);

    Ok(())
}

/// Tests the sparse settings update.
///
/// Expected: `PUT /settings` carrying only the given keys
#[tokio::test]
async fn settings_update_is_sparse() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("PUT", "/settings", 200, factory::settings::settings(&["10.0.0.0/8"]))
        .build()?;
    let (api, _) = client(test);
    let mut payload = serde_json::Map::new();
    payload.insert("allowed_ips".to_string(), json!(["10.0.0.0/8"]));

    let updated: SettingsDto = settings::update_settings(&api, &payload).await.unwrap();

    assert_eq!(updated.allowed_ips, vec!["10.0.0.0/8".to_string()]);
    assert_eq!(
        api.transport().last_request().unwrap().json(),
        Some(json!({ "allowed_ips": ["10.0.0.0/8"] }))
    );

    Ok(())
}
