use serde_json::json;

use super::*;
use crate::net::testing::{TestTab, block_on};
use crate::session::credential::{AdminCredential, AdminRole, SessionKind, UserCredential};

fn seed_admin(tab: &TestTab, token: &str) {
    tab.session
        .store
        .set_admin(&AdminCredential {
            token: token.to_owned(),
            id: 1,
            username: "root".to_owned(),
            name: "Root Admin".to_owned(),
            role: AdminRole::Superadmin,
        })
        .unwrap();
}

fn seed_user(tab: &TestTab, token: &str) {
    tab.session
        .store
        .set_user(&UserCredential { token: token.to_owned(), id: 42, name: "Jane Doe".to_owned() })
        .unwrap();
    tab.session.store.set_session_kind(SessionKind::User).unwrap();
}

// =============================================================
// Request interceptor
// =============================================================

#[test]
fn no_session_sends_no_authorization_header() {
    let tab = TestTab::new();
    block_on(tab.session.http.get::<serde_json::Value>("/admin/books")).unwrap();
    let sent = tab.transport.last_request();
    assert!(sent.header("Authorization").is_none());
    assert_eq!(sent.url, "/api/admin/books");
    assert_eq!(sent.header("accept"), Some("application/json"));
}

#[test]
fn user_token_is_attached_when_no_admin() {
    let tab = TestTab::new();
    seed_user(&tab, "xyz");
    block_on(tab.session.http.get::<serde_json::Value>("/user/42/semesters")).unwrap();
    assert_eq!(tab.transport.last_request().header("Authorization"), Some("Bearer xyz"));
}

#[test]
fn admin_token_wins_when_both_sessions_exist() {
    let tab = TestTab::new();
    seed_user(&tab, "xyz");
    seed_admin(&tab, "abc");
    block_on(tab.session.http.get::<serde_json::Value>("/user/42/semesters")).unwrap();
    assert_eq!(tab.transport.last_request().header("Authorization"), Some("Bearer abc"));
}

#[test]
fn json_body_sets_content_type() {
    let tab = TestTab::new();
    block_on(tab.session.http.post::<_, serde_json::Value>("/admin/groups", &json!({"groupName": "A"}))).unwrap();
    let sent = tab.transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
    assert_eq!(sent.body.as_deref(), Some(r#"{"groupName":"A"}"#));
}

#[test]
fn bodyless_post_has_no_content_type() {
    let tab = TestTab::new();
    block_on(tab.session.http.post_empty::<serde_json::Value>("/admin/groups/1/persons?personId=2")).unwrap();
    let sent = tab.transport.last_request();
    assert!(sent.body.is_none());
    assert!(sent.header("Content-Type").is_none());
}

// =============================================================
// Response interceptor
// =============================================================

#[test]
fn user_401_clears_only_user_session() {
    let tab = TestTab::new();
    seed_user(&tab, "xyz");
    tab.transport.reply(401, json!({}));

    let err = block_on(tab.session.http.get::<serde_json::Value>("/user/42/semesters")).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(tab.session.store.user().is_none());
    assert!(tab.session.store.session_kind().is_none());
    assert_eq!(tab.navigator.visits(), vec!["/user/login".to_owned()]);
}

#[test]
fn admin_401_clears_only_admin_session() {
    let tab = TestTab::new();
    seed_admin(&tab, "abc");
    tab.transport.reply(401, json!({}));

    let _ = block_on(tab.session.http.get::<serde_json::Value>("/admin/list"));

    assert!(tab.session.store.admin().is_none());
    assert_eq!(tab.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn admin_401_with_both_sessions_keeps_user_session() {
    let tab = TestTab::new();
    seed_user(&tab, "xyz");
    seed_admin(&tab, "abc");
    tab.transport.reply(401, json!({}));

    let _ = block_on(tab.session.http.get::<serde_json::Value>("/admin/list"));

    assert!(tab.session.store.admin().is_none());
    assert!(tab.session.user.is_authenticated());
    assert_eq!(tab.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn unauthenticated_401_follows_discriminator() {
    let tab = TestTab::new();
    tab.session.store.set_session_kind(SessionKind::User).unwrap();
    tab.transport.reply(401, json!({}));
    let _ = block_on(tab.session.http.get::<serde_json::Value>("/user/1/semesters"));
    assert!(tab.session.store.session_kind().is_none());
    assert_eq!(tab.navigator.visits(), vec!["/user/login".to_owned()]);

    let tab = TestTab::new();
    tab.transport.reply(401, json!({}));
    let _ = block_on(tab.session.http.get::<serde_json::Value>("/admin/list"));
    assert_eq!(tab.navigator.visits(), vec!["/login".to_owned()]);
}

/// Transport that swaps in a fresh admin login while the request is in flight.
#[derive(Clone)]
struct ReloginDuringRequest {
    tab_store: crate::session::store::TokenStore,
}

impl Transport for ReloginDuringRequest {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.tab_store
            .set_admin(&AdminCredential {
                token: "fresh".to_owned(),
                id: 1,
                username: "root".to_owned(),
                name: "Root Admin".to_owned(),
                role: AdminRole::Superadmin,
            })
            .unwrap();
        Ok(ApiResponse { status: 401, body: String::new() })
    }
}

#[test]
fn superseded_token_401_keeps_new_session() {
    let tab = TestTab::new();
    seed_admin(&tab, "stale");
    let navigator = crate::net::testing::RecordingNavigator::default();
    let http = HttpClient::new(
        ApiConfig::default(),
        tab.session.admin.clone(),
        tab.session.user.clone(),
        Arc::new(navigator.clone()),
        ReloginDuringRequest { tab_store: tab.session.store.clone() },
    );

    let err = block_on(http.get::<serde_json::Value>("/admin/list")).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(tab.session.admin.token().as_deref(), Some("fresh"));
    assert!(navigator.visits().is_empty());
}

// =============================================================
// Other statuses / decoding
// =============================================================

#[test]
fn validation_error_is_returned_without_side_effects() {
    let tab = TestTab::new();
    seed_admin(&tab, "abc");
    tab.transport.reply(400, json!({"success": false, "error": "Group name already exists"}));

    let err = block_on(tab.session.http.post::<_, serde_json::Value>("/admin/groups", &json!({}))).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 400, message: "Group name already exists".to_owned() });
    assert!(tab.session.admin.is_authenticated());
    assert!(tab.navigator.visits().is_empty());
}

#[test]
fn network_error_is_propagated() {
    let tab = TestTab::new();
    tab.transport.fail(ApiError::Network("offline".to_owned()));
    let err = block_on(tab.session.http.delete("/admin/books/1")).unwrap_err();
    assert_eq!(err, ApiError::Network("offline".to_owned()));
}

#[test]
fn mismatched_body_is_decode_error() {
    let tab = TestTab::new();
    tab.transport.reply(200, json!({"unexpected": true}));
    let err = block_on(tab.session.http.get::<Vec<i64>>("/admin/books")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn empty_body_decodes_as_null() {
    assert_eq!(decode::<()>(&ApiResponse { status: 204, body: String::new() }), Ok(()));
    assert_eq!(
        decode::<Option<i64>>(&ApiResponse { status: 200, body: "  ".to_owned() }),
        Ok(None)
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_off_browser() {
    let request = ApiRequest { method: Method::Get, url: "/api/x".to_owned(), headers: Vec::new(), body: None };
    let err = block_on(BrowserTransport.send(request)).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
