use serde_json::json;

use super::*;
use crate::net::testing::{TestTab, block_on};
use crate::session::credential::{AdminCredential, AdminRole, SessionKind};

fn admin_reply(tab: &TestTab) {
    tab.transport.reply(
        200,
        json!({"token": "abc", "id": 1, "username": "root", "name": "Root Admin", "type": "superadmin"}),
    );
}

fn user_reply(tab: &TestTab) {
    tab.transport.reply(200, json!({"token": "xyz", "adminId": 42, "username": "Jane Doe"}));
}

// =============================================================
// Independent domains
// =============================================================

#[test]
fn admin_login_does_not_touch_user_session() {
    let tab = TestTab::new();
    user_reply(&tab);
    block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap();
    assert!(tab.session.user.is_authenticated());

    admin_reply(&tab);
    block_on(tab.session.login_admin("root", "secret123")).unwrap();

    assert!(tab.session.admin.is_authenticated());
    assert!(tab.session.user.is_authenticated());
}

#[test]
fn logging_out_one_domain_keeps_the_other() {
    let tab = TestTab::new();
    admin_reply(&tab);
    block_on(tab.session.login_admin("root", "secret123")).unwrap();
    user_reply(&tab);
    block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap();

    tab.session.user.logout();
    assert!(tab.session.admin.is_authenticated());
    assert!(!tab.session.user.is_authenticated());

    user_reply(&tab);
    block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap();
    tab.session.admin.logout();
    assert!(!tab.session.admin.is_authenticated());
    assert!(tab.session.user.is_authenticated());
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn admin_session_ends_on_later_401() {
    let tab = TestTab::new();
    admin_reply(&tab);
    block_on(tab.session.login_admin("root", "secret123")).unwrap();
    assert_eq!(
        tab.session.admin.current(),
        Some(AdminCredential {
            token: "abc".to_owned(),
            id: 1,
            username: "root".to_owned(),
            name: "Root Admin".to_owned(),
            role: AdminRole::Superadmin,
        })
    );

    tab.transport.reply(401, json!({"error": "expired"}));
    let err = block_on(tab.session.http.get::<serde_json::Value>("/admin/groups")).unwrap_err();

    assert_eq!(err, crate::net::error::ApiError::Unauthorized);
    assert!(!tab.session.admin.is_authenticated());
    assert_eq!(tab.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn participant_login_exposes_identity() {
    let tab = TestTab::new();
    user_reply(&tab);
    block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap();

    assert_eq!(tab.session.user.id(), Some(42));
    assert_eq!(tab.session.user.id().map(|id| id.to_string()).as_deref(), Some("42"));
    assert_eq!(tab.session.user.name().as_deref(), Some("Jane Doe"));
    assert_eq!(tab.session.store.session_kind(), Some(SessionKind::User));
}

// =============================================================
// LoginError copy
// =============================================================

#[test]
fn login_error_messages_branch_on_kind_and_domain() {
    assert_eq!(
        LoginError::InvalidCredentials.user_message(Domain::Admin),
        "Invalid username or password. Please try again."
    );
    assert_eq!(
        LoginError::InvalidCredentials.user_message(Domain::User),
        "Invalid name or password. Please try again."
    );
    assert_eq!(
        LoginError::AccountDisabled.user_message(Domain::Admin),
        "Your account has been deleted. Please contact an administrator."
    );
    assert_eq!(LoginError::Failed("Server busy".to_owned()).user_message(Domain::User), "Server busy");
    assert_eq!(
        LoginError::Failed(String::new()).user_message(Domain::Admin),
        "Login failed. Please check your credentials."
    );
}

#[test]
fn non_credential_failures_do_not_blame_the_password() {
    let incomplete = "Login failed: the server sent an incomplete response. Please try again.";
    assert_eq!(LoginError::MissingToken.user_message(Domain::Admin), incomplete);
    assert_eq!(LoginError::MissingId.user_message(Domain::User), incomplete);
    assert_eq!(
        LoginError::Storage(StorageError::Unavailable).user_message(Domain::User),
        "Could not save your session in this browser. Check that site storage is enabled."
    );
}

#[test]
fn api_errors_convert_to_login_errors() {
    assert_eq!(LoginError::from(ApiError::Unauthorized), LoginError::InvalidCredentials);
    assert_eq!(LoginError::from(ApiError::Forbidden("x".to_owned())), LoginError::AccountDisabled);
    assert_eq!(
        LoginError::from(ApiError::Status { status: 500, message: "boom".to_owned() }),
        LoginError::Failed("boom".to_owned())
    );
}
