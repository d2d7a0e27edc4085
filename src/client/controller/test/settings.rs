use crate::client::{controller::settings::PasswordForm, model::error::ValidationError};

use super::*;

fn settings_controller(api: ApiClient<MockBackend>) -> SettingsController<MockBackend> {
    SettingsController::new(api)
}

/// Tests loading the settings page for an unrestricted user.
///
/// Expected: profile form filled, IP restriction off
#[tokio::test]
async fn load_reads_profile_and_settings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/settings/profile", 200, factory::settings::profile("alice", &["0.0.0.0/0"]))
        .with_response("GET", "/settings", 200, factory::settings::settings(&["0.0.0.0/0"]))
        .build()?;
    let (api, _) = client(test);
    let settings = settings_controller(api);

    settings.load().await;

    let view = settings.view();
    assert!(view.profile.is_fetched());
    assert!(view.settings.is_fetched());
    assert_eq!(view.profile_form.first_name, "Ada");
    assert!(!view.profile_form.ip_restricted);

    Ok(())
}

/// Tests turning the IP restriction off.
///
/// Verifies the allowed list is replaced by the catch-all range and cannot be edited.
///
/// Expected: `PUT /settings` with `allowed_ips: ["0.0.0.0/0"]`
#[tokio::test]
async fn unrestricting_sends_catch_all_range() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/settings/profile", 200, factory::settings::profile("alice", &["10.0.0.0/8"]))
        .with_response("GET", "/settings", 200, factory::settings::settings(&["10.0.0.0/8"]))
        .with_response("PUT", "/settings", 200, factory::settings::settings(&["0.0.0.0/0"]))
        .build()?;
    let (api, _) = client(test);
    let settings = settings_controller(api.clone());
    settings.load().await;
    assert!(settings.view().profile_form.ip_restricted);

    settings.set_ip_restricted(false);
    settings.set_profile_field("allowed_ips", "192.168.0.0/16");
    settings.update_profile().await;

    let put = api
        .transport()
        .requests_to("/settings")
        .into_iter()
        .find(|r| r.method == "PUT")
        .unwrap();
    let body = put.json().unwrap();
    assert_eq!(body["allowed_ips"], json!(["0.0.0.0/0"]));
    assert_eq!(
        settings.view().notice.map(|n| n.message),
        Some("Profile updated successfully".to_string())
    );

    Ok(())
}

/// Tests the profile update payload.
///
/// Expected: blank fields left out, profile reloaded afterwards
#[tokio::test]
async fn profile_update_is_sparse() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("GET", "/settings/profile", 200, factory::settings::profile("alice", &["10.0.0.0/8"]))
        .with_response("GET", "/settings", 200, factory::settings::settings(&["10.0.0.0/8"]))
        .with_response("PUT", "/settings", 200, factory::settings::settings(&["10.0.0.0/8"]))
        .build()?;
    let (api, _) = client(test);
    let settings = settings_controller(api.clone());
    settings.load().await;

    settings.set_profile_field("last_name", "  ");
    settings.update_profile().await;

    let put = api
        .transport()
        .requests_to("/settings")
        .into_iter()
        .find(|r| r.method == "PUT")
        .unwrap();
    assert_eq!(
        put.json().unwrap(),
        json!({
            "first_name": "Ada",
            "email": "alice@example.com",
            "allowed_ips": ["10.0.0.0/8"]
        })
    );
    assert_eq!(api.transport().requests_to("/settings/profile").len(), 2);

    Ok(())
}

/// Tests password form validation.
///
/// Expected: mismatch checked before length
#[test]
fn password_validation() {
    let mut form = PasswordForm::default();
    form.set("new_password", "short".to_string());
    form.set("confirm_password", "other".to_string());
    assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

    form.set("confirm_password", "short".to_string());
    assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort(8)));

    form.set("new_password", "long-enough".to_string());
    form.set("confirm_password", "long-enough".to_string());
    assert_eq!(form.validate(), Ok("long-enough".to_string()));
}

/// Tests an invalid password change.
///
/// Expected: error notice, nothing sent
#[tokio::test]
async fn invalid_password_is_not_sent() -> Result<(), TestError> {
    let (api, _) = client(TestBuilder::new().logged_in_as("alice", "Admin 2L").build()?);
    let settings = settings_controller(api.clone());
    settings.set_password_field("new_password", "abc");
    settings.set_password_field("confirm_password", "abd");

    settings.change_password().await;

    assert_eq!(
        settings.view().notice.map(|n| n.message),
        Some("New password and confirmation do not match".to_string())
    );
    assert!(api.transport().requests().is_empty());

    Ok(())
}

/// Tests a successful password change.
///
/// Expected: `PUT /settings` with the password only, form cleared
#[tokio::test]
async fn password_change_clears_form() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .logged_in_as("alice", "Admin 2L")
        .with_response("PUT", "/settings", 200, factory::settings::settings(&[]))
        .build()?;
    let (api, _) = client(test);
    let settings = settings_controller(api.clone());
    settings.set_password_field("current_password", "old-password");
    settings.set_password_field("new_password", "new-password");
    settings.set_password_field("confirm_password", "new-password");

    settings.change_password().await;

    assert_eq!(
        api.transport().last_request().and_then(|r| r.json()),
        Some(json!({ "password": "new-password" }))
    );
    let view = settings.view();
    assert_eq!(view.password_form, PasswordForm::default());
    assert!(!view.saving);
    assert_eq!(view.notice.map(|n| n.message), Some("Password changed successfully".to_string()));

    Ok(())
}

/// Tests the timed close of a settings notice.
///
/// Expected: an unknown id keeps the notice; its own id clears it
#[tokio::test]
async fn notice_expires_by_id() -> Result<(), TestError> {
    let (api, _) = client(TestBuilder::new().logged_in_as("alice", "Admin 2L").build()?);
    let settings = settings_controller(api);
    settings.set_password_field("new_password", "abc");
    settings.set_password_field("confirm_password", "abd");
    settings.change_password().await;
    let notice = settings.view().notice.unwrap();

    settings.expire_notice(notice.id + 1);
    assert!(settings.view().notice.is_some());

    settings.expire_notice(notice.id);
    assert!(settings.view().notice.is_none());

    Ok(())
}
