use std::{cell::Cell, rc::Rc};

use futures_util::future::join_all;

use crate::{
    client::resource::{FinanceAccounts, Groups, Servers, Users},
    model::server::ServerStatus,
};

use super::*;

/// Tests loading the first page.
///
/// Expected: one `GET /servers?skip=0&limit=50`, rows fetched
#[tokio::test]
async fn load_fetches_first_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/servers", 200, factory::server::list(3))
        .build()?;
    let (api, _) = client(test);
    let servers = controller::<Servers>(api.clone());

    servers.load().await;

    assert_eq!(servers.view().rows.data().map(Vec::len), Some(3));
    let request = api.transport().last_request().unwrap();
    assert_eq!(request.query.as_deref(), Some("skip=0&limit=50"));

    Ok(())
}

/// Tests an empty page.
///
/// Expected: the "No groups found" placeholder
#[tokio::test]
async fn empty_page_shows_placeholder() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/groups", 200, json!([]))
        .build()?;
    let (api, _) = client(test);
    let groups = controller::<Groups>(api);

    groups.load().await;

    assert_eq!(groups.table().body, TableBody::Empty("No groups found".to_string()));

    Ok(())
}

/// Tests a failed load.
///
/// Expected: error row and error notice
#[tokio::test]
async fn failed_load_sets_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/groups", 500, factory::auth::detail("boom"))
        .build()?;
    let (api, _) = client(test);
    let groups = controller::<Groups>(api);

    groups.load().await;

    assert_eq!(groups.table().body, TableBody::Error("Failed to load groups".to_string()));
    assert!(groups.view().notice.is_some_and(|notice| notice.is_error()));

    Ok(())
}

/// Tests the timed close of a notice that was replaced meanwhile.
///
/// Verifies the timer of the first notice leaves the second one up, and the
/// second notice's own timer closes it.
///
/// Expected: second notice kept, then cleared
#[tokio::test]
async fn expired_notice_only_clears_itself() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/groups", 500, factory::auth::detail("boom"))
        .build()?;
    let (api, _) = client(test);
    let groups = controller::<Groups>(api);

    groups.load().await;
    let first = groups.view().notice.unwrap();
    groups.load().await;
    let second = groups.view().notice.unwrap();

    groups.expire_notice(first.id);
    assert_eq!(groups.view().notice.map(|n| n.id), Some(second.id));

    groups.expire_notice(second.id);
    assert!(groups.view().notice.is_none());

    Ok(())
}

/// Tests a burst of keystrokes in the search box.
///
/// Verifies that only the last search text reaches the backend and paging restarts.
///
/// Expected: exactly one list request carrying `search=abc` and `skip=0`
#[tokio::test]
async fn search_is_debounced() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/servers", 200, factory::server::list(1))
        .build()?;
    let (api, _) = client(test);
    let servers = controller::<Servers>(api.clone());
    servers.change_page(3).await;
    let before = api.transport().requests_to("/servers").len();

    let sleeper = YieldSleep;
    join_all(["a", "ab", "abc"].map(|text| servers.search(text, &sleeper))).await;

    let requests = api.transport().requests_to("/servers");
    assert_eq!(requests.len(), before + 1);
    assert_eq!(
        requests.last().and_then(|r| r.query.as_deref()),
        Some("skip=0&limit=50&search=abc")
    );
    assert_eq!(servers.view().search_text, "abc");
    assert_eq!(servers.view().query.page(), 1);

    Ok(())
}

/// Tests asking for page 0.
///
/// Expected: no request, page unchanged
#[tokio::test]
async fn page_zero_is_ignored() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/servers", 200, factory::server::list(1))
        .build()?;
    let (api, _) = client(test);
    let servers = controller::<Servers>(api.clone());

    servers.change_page(0).await;

    assert!(api.transport().requests().is_empty());
    assert_eq!(servers.view().query.page(), 1);

    Ok(())
}

/// Tests changing the page size.
///
/// Expected: back to page 1 with the new limit
#[tokio::test]
async fn page_size_restarts_paging() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/servers", 200, factory::server::list(1))
        .build()?;
    let (api, _) = client(test);
    let servers = controller::<Servers>(api.clone());
    servers.change_page(2).await;

    servers.set_page_size(25).await;

    let request = api.transport().last_request().unwrap();
    assert_eq!(request.query.as_deref(), Some("skip=0&limit=25"));

    Ok(())
}

/// Tests that a slow response cannot overwrite a newer one.
///
/// Expected: the older result is dropped
#[tokio::test]
async fn stale_load_is_discarded() -> Result<(), TestError> {
    let (api, _) = client(TestBuilder::new().logged_in_as("alice", "Admin 2L").build()?);
    let groups = controller::<Groups>(api);
    let older: Value = factory::group::create_group(1);
    let newer: Value = factory::group::create_group(2);

    let (first, _) = groups.begin_load();
    let (second, _) = groups.begin_load();

    assert!(groups.complete_load(second, Ok(vec![serde_json::from_value(newer).unwrap()])));
    assert!(!groups.complete_load(first, Ok(vec![serde_json::from_value(older).unwrap()])));

    let ids: Vec<i64> = groups
        .view()
        .rows
        .data()
        .map(|rows| rows.iter().map(|g| g.id).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec![2]);

    Ok(())
}

/// Tests that every state change reaches the registered listener.
///
/// Expected: at least one notification for loading and one for the result
#[tokio::test]
async fn changes_are_announced() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/groups", 200, json!([]))
        .build()?;
    let (api, _) = client(test);
    let groups = controller::<Groups>(api);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    groups.set_on_change(move || counter.set(counter.get() + 1));

    groups.load().await;

    assert!(calls.get() >= 2);

    Ok(())
}

/// Tests the row actions on the users page.
///
/// Verifies Super Admin rows and the actor's own row have no Delete.
///
/// Expected: Delete only on the regular user's row
#[tokio::test]
async fn user_rows_hide_forbidden_deletes() -> Result<(), TestError> {
    use test_utils::factory::user::UserFactory;

    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response(
            "GET",
            "/users",
            200,
            json!([
                UserFactory::new(1).username("alice").role("Admin 2L").build(),
                UserFactory::new(2).username("root").role("Super Admin").build(),
                UserFactory::new(3).username("bob").role("Admin 1L").build(),
            ]),
        )
        .build()?;
    let (api, _) = client(test);
    let users = controller::<Users>(api);

    users.load().await;

    let TableBody::Rows(rows) = users.table().body else {
        panic!("expected rows");
    };
    let actions: Vec<_> = rows.into_iter().map(|row| row.actions).collect();
    assert_eq!(
        actions,
        vec![
            vec![RowAction::Edit],
            vec![RowAction::Edit],
            vec![RowAction::Edit, RowAction::Delete],
        ]
    );

    Ok(())
}

/// Tests finance rows whose server lookup fails.
///
/// Expected: the page still loads; the orphaned row shows an unknown server status
#[tokio::test]
async fn finance_rows_survive_missing_server() -> Result<(), TestError> {
    use test_utils::factory::{finance, server::ServerFactory};

    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response(
            "GET",
            "/finance",
            200,
            json!([finance::create_account(1, 10), finance::create_account(2, 99)]),
        )
        .with_response("GET", "/servers/10", 200, ServerFactory::new(10).status("abuse").group_id(4).build())
        .build()?;
    let (api, _) = client(test);
    let accounts = controller::<FinanceAccounts>(api.clone());

    accounts.load().await;

    let rows = accounts.view().rows.data().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].server_status, ServerStatus::Abuse);
    assert_eq!(rows[0].server_group, Some(4));
    assert_eq!(rows[1].server_status, ServerStatus::Unknown);
    assert_eq!(rows[1].server_group, None);
    assert!(accounts.view().notice.is_none());
    assert_eq!(api.transport().requests_to("/servers/99").len(), 1);

    Ok(())
}

/// Tests finance server lookups after the token has expired.
///
/// Verifies the first rejected lookup ends the session and the remaining lookups
/// are not sent.
///
/// Expected: one logout notification, one `/servers/*` request
#[tokio::test]
async fn finance_lookups_stop_after_logout() -> Result<(), TestError> {
    use test_utils::factory::finance;

    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response(
            "GET",
            "/finance",
            200,
            json!([
                finance::create_account(1, 10),
                finance::create_account(2, 11),
                finance::create_account(3, 12),
            ]),
        )
        .with_response("GET", "/servers/10", 401, factory::auth::detail("Not authenticated"))
        .with_response("GET", "/servers/11", 401, factory::auth::detail("Not authenticated"))
        .with_response("GET", "/servers/12", 401, factory::auth::detail("Not authenticated"))
        .build()?;
    let (api, _) = client(test);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    api.session()
        .set_logout_listener(move || counter.set(counter.get() + 1));
    let accounts = controller::<FinanceAccounts>(api.clone());

    accounts.load().await;

    assert_eq!(calls.get(), 1);
    let lookups = api
        .transport()
        .requests()
        .into_iter()
        .filter(|request| request.path.starts_with("/servers/"))
        .count();
    assert_eq!(lookups, 1);
    let rows = accounts.view().rows.data().cloned().unwrap_or_default();
    assert!(rows.iter().all(|row| row.server_status == ServerStatus::Unknown));

    Ok(())
}
