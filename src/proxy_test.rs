use axum::http::HeaderValue;

use super::*;

#[test]
fn target_url_keeps_path_and_query() {
    let uri: Uri = "/api/admin/participations?page=0&size=20&sort=participationDate%2Cdesc".parse().unwrap();
    assert_eq!(
        target_url("http://localhost:8080/", &uri),
        "http://localhost:8080/api/admin/participations?page=0&size=20&sort=participationDate%2Cdesc"
    );
}

#[test]
fn target_url_without_query() {
    let uri: Uri = "/api/user/42/semesters".parse().unwrap();
    assert_eq!(target_url("https://api.example.org", &uri), "https://api.example.org/api/user/42/semesters");
}

#[test]
fn only_whitelisted_headers_are_forwarded() {
    let mut inbound = HeaderMap::new();
    inbound.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    inbound.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    inbound.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    inbound.insert(header::HOST, HeaderValue::from_static("console.local"));

    let out = forwarded_headers(&inbound);

    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(header::COOKIE).is_none());
}

#[test]
fn bad_gateway_is_502() {
    assert_eq!(bad_gateway().status(), StatusCode::BAD_GATEWAY);
}
