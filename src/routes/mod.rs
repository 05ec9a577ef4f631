// ABOUTME: Route module organization for the storefront HTTP endpoints
// ABOUTME: Assembles all domain routers and the shared middleware stack
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Route module for the storefront server
//!
//! Each domain module contains route definitions and thin handler
//! functions; [`router`] merges them and applies the shared middleware
//! stack (tracing, CORS, timeout, body limit).

/// Authentication and password-reset routes
pub mod auth;
/// Health check routes
pub mod health;
/// Order placement and fulfillment routes
pub mod orders;
/// Catalog routes
pub mod products;
/// One-time seeding routes
pub mod seed;
/// Authenticated user profile routes
pub mod users;

use crate::constants::limits;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(auth::AuthRoutes::routes(resources.clone()))
        .merge(users::UserRoutes::routes(resources.clone()))
        .merge(products::ProductRoutes::routes(resources.clone()))
        .merge(orders::OrderRoutes::routes(resources.clone()))
        .merge(seed::SeedRoutes::routes(resources.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&resources.config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            limits::REQUEST_TIMEOUT_SECS,
        )))
        .layer(RequestBodyLimitLayer::new(limits::MAX_JSON_BODY_BYTES))
}
