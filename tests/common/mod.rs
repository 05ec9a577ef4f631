// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builds in-memory server resources and drives the router with one-shot requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(dead_code)]

use axum::body::Body;
use http::{Request, StatusCode};
use std::sync::Arc;
use storefront_server::{
    config::environment::{
        AuthConfig, CorsConfig, DatabaseConfig, Environment, SeedConfig, ServerConfig,
    },
    database::{SqliteStore, StoreProvider},
    models::Admin,
    resources::ServerResources,
};
use tower::ServiceExt;

/// Secret shared by every test resource bundle so tests can mint their
/// own tokens when exercising edge cases
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        auth: AuthConfig {
            jwt_secret: TEST_JWT_SECRET.into(),
            jwt_expiry_hours: 12,
            // minimum bcrypt cost keeps the suite fast
            bcrypt_cost: 4,
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
        seed: SeedConfig {
            admin_email: "admin@storefront.local".into(),
            admin_password: "admin123".into(),
        },
        environment: Environment::Testing,
    }
}

pub async fn test_resources() -> Arc<ServerResources> {
    let database = SqliteStore::connect("sqlite::memory:").await.unwrap();
    database.migrate().await.unwrap();
    Arc::new(ServerResources::new(database, test_config()))
}

/// Insert an admin account directly, bypassing the seed endpoint
pub async fn provision_admin(resources: &Arc<ServerResources>, email: &str, password: &str) {
    let password_hash = resources.password_hasher.hash(password).await.unwrap();
    let admin = Admin::new(email.into(), password_hash);
    resources.database.create_admin(&admin).await.unwrap();
}

/// Fire one request at the router and decode the JSON response body
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Shorthand for the error message inside the standard error envelope
pub fn error_message(body: &serde_json::Value) -> &str {
    body["error"]["message"].as_str().unwrap_or_default()
}
