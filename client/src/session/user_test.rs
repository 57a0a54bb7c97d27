use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::*;
use crate::net::testing::{RejectingStorage, TestTab, block_on};
use crate::session::storage::{MemoryStorage, StorageBackend, StorageError};
use crate::session::store::{SESSION_KIND_KEY, USER_KEY};

fn jane_response() -> serde_json::Value {
    json!({"token": "xyz", "adminId": 42, "username": "Jane Doe", "name": "Jane Doe"})
}

// =============================================================
// login
// =============================================================

#[test]
fn login_persists_record_and_marker() {
    let tab = TestTab::new();
    tab.transport.reply(200, jane_response());

    let credential = block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap();

    assert_eq!(credential, UserCredential { token: "xyz".to_owned(), id: 42, name: "Jane Doe".to_owned() });
    let user = &tab.session.user;
    assert_eq!(user.id(), Some(42));
    assert_eq!(user.name().as_deref(), Some("Jane Doe"));
    assert_eq!(user.token().as_deref(), Some("xyz"));
    assert_eq!(tab.session.store.session_kind(), Some(SessionKind::User));
    assert!(user.is_authenticated());
}

#[test]
fn login_sends_name_as_username_field() {
    let tab = TestTab::new();
    tab.transport.reply(200, jane_response());
    block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap();

    let sent = tab.transport.last_request();
    assert_eq!(sent.url, "/api/user/login");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"username": "Jane Doe", "password": "pw1234"}));
}

#[test]
fn failed_login_leaves_no_keys() {
    let tab = TestTab::new();
    tab.transport.reply(401, json!({"error": "Invalid name or password"}));

    let err = block_on(tab.session.login_user("Jane Doe", "bad")).unwrap_err();

    assert_eq!(err, LoginError::InvalidCredentials);
    assert!(tab.storage.is_empty());
    assert!(tab.navigator.visits().is_empty());
}

#[test]
fn response_without_person_id_is_rejected() {
    let tab = TestTab::new();
    tab.transport.reply(200, json!({"token": "xyz", "username": "Jane Doe"}));

    let err = block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap_err();

    assert_eq!(err, LoginError::MissingId);
    assert!(tab.storage.is_empty());
}

fn tab_rejecting(keys: &[&'static str]) -> (TestTab, Arc<AtomicUsize>) {
    let storage = MemoryStorage::new();
    let tab = TestTab::with_backend(storage.clone(), Arc::new(RejectingStorage::new(storage, keys)));
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    tab.session.events.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    tab.transport.reply(200, jane_response());
    (tab, hits)
}

#[test]
fn rejected_marker_write_rolls_back_record() {
    let (tab, hits) = tab_rejecting(&[SESSION_KIND_KEY]);

    let err = block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap_err();

    assert_eq!(err, LoginError::Storage(StorageError::Rejected("quota".to_owned())));
    assert!(tab.storage.keys().is_empty());
    assert!(tab.session.user.current().is_none());
    assert!(!tab.session.user.is_authenticated());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn rejected_record_write_leaves_nothing() {
    let (tab, hits) = tab_rejecting(&[USER_KEY]);

    let err = block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap_err();

    assert!(matches!(err, LoginError::Storage(_)));
    assert!(tab.storage.keys().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// =============================================================
// is_authenticated needs record and marker
// =============================================================

#[test]
fn token_without_marker_is_not_authenticated() {
    let tab = TestTab::new();
    tab.session
        .store
        .set_user(&UserCredential { token: "stray".to_owned(), id: 1, name: "X".to_owned() })
        .unwrap();
    assert_eq!(tab.session.user.token().as_deref(), Some("stray"));
    assert!(!tab.session.user.is_authenticated());
}

#[test]
fn marker_without_record_is_not_authenticated() {
    let tab = TestTab::new();
    tab.storage.set_item(SESSION_KIND_KEY, "user").unwrap();
    assert!(tab.session.user.has_active_marker());
    assert!(!tab.session.user.is_authenticated());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_removes_record_and_marker() {
    let tab = TestTab::new();
    tab.transport.reply(200, jane_response());
    block_on(tab.session.login_user("Jane Doe", "pw1234")).unwrap();

    tab.session.user.logout();

    assert!(tab.storage.get_item(USER_KEY).is_none());
    assert!(tab.storage.get_item(SESSION_KIND_KEY).is_none());
    assert!(!tab.session.user.is_authenticated());
    assert!(tab.session.user.id().is_none());
}

#[test]
fn logout_when_signed_out_is_noop() {
    let tab = TestTab::new();
    tab.session.user.logout();
    assert!(!tab.session.user.is_authenticated());
    assert!(tab.storage.is_empty());
}
