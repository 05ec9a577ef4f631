// ABOUTME: Integration tests for the per-role bearer-token request guards
// ABOUTME: Covers missing/malformed/expired tokens, role mismatch, and the admin re-check asymmetry
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{error_message, send, test_resources, TEST_JWT_SECRET};
use http::StatusCode;
use serde_json::json;
use storefront_server::auth::AuthManager;
use storefront_server::models::Role;
use storefront_server::routes;
use uuid::Uuid;

async fn register_and_get_token(app: &axum::Router) -> String {
    let (_, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({"name": "A", "email": "a@x.com", "password": "secret1"})),
    )
    .await;
    body["token"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let resources = test_resources().await;
    let app = routes::router(resources);

    let (status, body) = send(&app, "GET", "/api/user/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), "No token provided");
}

#[tokio::test]
async fn test_header_without_bearer_prefix() {
    let resources = test_resources().await;
    let app = routes::router(resources.clone());
    let token = register_and_get_token(&app).await;

    let request = http::Request::builder()
        .method("GET")
        .uri("/api/user/profile")
        .header("authorization", token) // no "Bearer " prefix
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let resources = test_resources().await;
    let app = routes::router(resources);

    let (status, body) = send(
        &app,
        "GET",
        "/api/user/profile",
        Some("not.a.token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token_rejected_identically_to_malformed() {
    let resources = test_resources().await;
    let app = routes::router(resources);

    // Same secret, negative lifetime: a structurally valid but expired token
    let expired = AuthManager::new(TEST_JWT_SECRET.as_bytes(), -1)
        .issue_token(Uuid::new_v4(), "a@x.com", Role::User)
        .unwrap();

    let (expired_status, expired_body) =
        send(&app, "GET", "/api/user/profile", Some(&expired), None).await;
    let (garbage_status, garbage_body) =
        send(&app, "GET", "/api/user/profile", Some("garbage"), None).await;

    assert_eq!(expired_status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage_status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired_body, garbage_body);
}

#[tokio::test]
async fn test_user_guard_rechecks_store() {
    let resources = test_resources().await;
    let app = routes::router(resources.clone());

    // Structurally valid user token whose subject was never persisted -
    // the same situation as a token outliving its deleted account
    let stale = resources
        .auth_manager
        .issue_token(Uuid::new_v4(), "ghost@x.com", Role::User)
        .unwrap();

    let (status, body) = send(&app, "GET", "/api/user/profile", Some(&stale), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&body), "User not found");
}

#[tokio::test]
async fn test_admin_guard_skips_store_recheck() {
    let resources = test_resources().await;
    let app = routes::router(resources.clone());

    // No admin record exists for this subject; the admin guard accepts
    // the token on signature and role alone
    let token = resources
        .auth_manager
        .issue_token(Uuid::new_v4(), "root@x.com", Role::Admin)
        .unwrap();

    let (status, body) = send(&app, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_role_mismatch_rejected_both_ways() {
    let resources = test_resources().await;
    let app = routes::router(resources.clone());
    let user_token = register_and_get_token(&app).await;

    let admin_token = resources
        .auth_manager
        .issue_token(Uuid::new_v4(), "root@x.com", Role::Admin)
        .unwrap();

    // User token against an admin endpoint
    let (status, _) = send(&app, "GET", "/api/orders", Some(&user_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Admin token against the user profile endpoint
    let (status, _) = send(&app, "GET", "/api/user/profile", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_user_token_resolves_identity() {
    let resources = test_resources().await;
    let app = routes::router(resources.clone());
    let token = register_and_get_token(&app).await;

    let (status, body) = send(&app, "GET", "/api/user/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@x.com");
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
}
