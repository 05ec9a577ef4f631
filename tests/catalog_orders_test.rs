// ABOUTME: Integration tests for catalog management, orders, profile, and seeding
// ABOUTME: Exercises admin-guarded CRUD and the public storefront surface end to end
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{error_message, provision_admin, send, test_resources};
use http::StatusCode;
use serde_json::json;
use storefront_server::routes;

async fn admin_token(app: &axum::Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn test_health_endpoint() {
    let resources = test_resources().await;
    let app = routes::router(resources);

    let (status, body) = send(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_seed_bootstrap_and_admin_login() {
    let resources = test_resources().await;
    let app = routes::router(resources);

    let (status, body) = send(&app, "GET", "/api/check-admin", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exists"], false);

    let (status, body) = send(&app, "POST", "/api/seed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["admin"]["email"], "admin@storefront.local");

    let (status, body) = send(&app, "GET", "/api/check-admin", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exists"], true);

    // Seeded credentials log in with role admin
    let token = admin_token(&app, "admin@storefront.local", "admin123").await;
    assert!(!token.is_empty());

    // The demo product is browseable without authentication
    let (status, body) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["slug"], "premium-sampler-box");

    // Re-seeding replaces rather than duplicates
    let (status, _) = send(&app, "POST", "/api/seed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/api/products", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_product_crud_requires_admin() {
    let resources = test_resources().await;
    provision_admin(&resources, "root@x.com", "adminpw1").await;
    let app = routes::router(resources);

    // Unauthenticated create is rejected
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        None,
        Some(json!({"name": "Box", "slug": "box"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = admin_token(&app, "root@x.com", "adminpw1").await;

    // Name and slug are mandatory
    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(&token),
        Some(json!({"name": "Box"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Name and slug are required");

    // Price is derived from actual + margin
    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(&token),
        Some(json!({
            "name": "Box",
            "slug": "box",
            "actualPrice": 120.0,
            "marginPrice": 30.0,
            "stockQuantity": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], 150.0);
    let product_id = body["id"].as_str().unwrap().to_owned();

    // Duplicate slug conflicts
    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(&token),
        Some(json!({"name": "Other", "slug": "box"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Product with this slug already exists");

    // Partial update recomputes the price
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/products/{product_id}"),
        Some(&token),
        Some(json!({"marginPrice": 80.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 200.0);

    // Public read surface
    let (status, body) = send(&app, "GET", &format!("/api/products/{product_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "box");

    let (status, body) = send(&app, "GET", "/api/products/not-a-uuid", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Product not found");

    // Delete, then the second delete is a 404
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/products/{product_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/products/{product_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_order_placement_and_fulfillment() {
    let resources = test_resources().await;
    provision_admin(&resources, "root@x.com", "adminpw1").await;
    let app = routes::router(resources);

    // Missing fields
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({"customerName": "B", "email": "b@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "All fields are required");

    // Empty items array
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "customerName": "B",
            "email": "b@x.com",
            "phone": "+1555",
            "address": "12 Lane",
            "items": [],
            "total": 299.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Items array is required and cannot be empty");

    // Placement is public and starts pending
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "customerName": "B",
            "email": "b@x.com",
            "phone": "+1555",
            "address": "12 Lane",
            "items": [{"sku": "box", "qty": 2}],
            "total": 299.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["order"]["status"], "pending");
    let order_id = body["id"].as_str().unwrap().to_owned();

    // Listing requires admin
    let (status, _) = send(&app, "GET", "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = admin_token(&app, "root@x.com", "adminpw1").await;
    let (status, body) = send(&app, "GET", "/api/orders", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Invalid status string
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{order_id}"),
        Some(&token),
        Some(json!({"status": "teleported"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Valid status is required");

    // Valid transition
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{order_id}"),
        Some(&token),
        Some(json!({"status": "shipped"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "shipped");

    // Unknown order id
    let (status, body) = send(&app, "GET", "/api/orders/not-a-uuid", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Order not found");
}

#[tokio::test]
async fn test_profile_update_flow() {
    let resources = test_resources().await;
    provision_admin(&resources, "root@x.com", "adminpw1").await;
    let app = routes::router(resources);

    let (_, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({"name": "A", "email": "a@x.com", "password": "secret1"})),
    )
    .await;
    let token = body["token"].as_str().unwrap().to_owned();

    send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({"name": "C", "email": "c@x.com", "password": "secret1"})),
    )
    .await;

    // Partial update; phone may be set to a value and address left alone
    let (status, body) = send(
        &app,
        "PUT",
        "/api/user/profile",
        Some(&token),
        Some(json!({"phone": "+1 (555) 123-4567", "address": "12 Lane"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "+1 (555) 123-4567");
    assert_eq!(body["address"], "12 Lane");
    assert_eq!(body["name"], "A");

    // Email collisions with another user or an admin are conflicts
    for taken in ["c@x.com", "Root@X.com"] {
        let (status, body) = send(
            &app,
            "PUT",
            "/api/user/profile",
            Some(&token),
            Some(json!({"email": taken})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), "Email already exists");
    }

    // Setting your own email (case-folded) is not a conflict
    let (status, body) = send(
        &app,
        "PUT",
        "/api/user/profile",
        Some(&token),
        Some(json!({"email": "A@X.com", "name": "Asha"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["name"], "Asha");

    let (status, body) = send(&app, "GET", "/api/user/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["phone"], "+1 (555) 123-4567");
}
