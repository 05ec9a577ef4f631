// ABOUTME: One-time database seeding endpoints for initial deployment bootstrap
// ABOUTME: Provisions the admin account and a demo product; remove after seeding production
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Seed routes
//!
//! `POST /api/seed` replaces the catalog and admin collections with a
//! known-good starting state, so re-seeding replaces rather than
//! duplicates. The admin password comes from `ADMIN_PASSWORD` and is
//! echoed in the response for the operator performing the bootstrap.

use crate::constants::defaults;
use crate::database::StoreProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{Admin, Product};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Seed operation response
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    pub admin: SeedAdminInfo,
}

/// Bootstrap credentials echoed to the operator
#[derive(Debug, Serialize)]
pub struct SeedAdminInfo {
    pub email: String,
    pub password: String,
    pub note: String,
}

/// Seeding service
pub struct SeedService {
    resources: Arc<ServerResources>,
}

impl SeedService {
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Replace catalog and admin collections with the seed state
    ///
    /// # Errors
    ///
    /// Returns an internal error if any store or hashing step fails.
    pub async fn seed(&self) -> AppResult<SeedResponse> {
        let database = &self.resources.database;

        database.delete_all_products().await?;
        database.delete_all_admins().await?;
        info!("Cleared existing catalog and admin data");

        let mut product = Product::new(
            defaults::DEMO_PRODUCT_NAME.into(),
            defaults::DEMO_PRODUCT_SLUG.into(),
        );
        product.description = defaults::DEMO_PRODUCT_DESCRIPTION.into();
        product.price = defaults::DEMO_PRODUCT_PRICE;
        database.create_product(&product).await?;
        info!("Created seed product: {}", product.name);

        let admin_email = self.resources.config.seed.admin_email.clone();
        let admin_password = self.resources.config.seed.admin_password.clone();
        let password_hash = self.resources.password_hasher.hash(&admin_password).await?;

        let admin = Admin::new(admin_email, password_hash);
        database.create_admin(&admin).await?;
        info!("Created admin account: {}", admin.email);

        Ok(SeedResponse {
            success: true,
            message: "Database seeded successfully".into(),
            admin: SeedAdminInfo {
                email: admin.email,
                password: admin_password,
                note: "Use these credentials to login".into(),
            },
        })
    }
}

/// Seed routes
pub struct SeedRoutes;

impl SeedRoutes {
    /// Create the bootstrap routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/check-admin", get(Self::handle_check_admin))
            .route("/api/seed", post(Self::handle_seed))
            .with_state(resources)
    }

    async fn handle_check_admin(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let admin = resources
            .database
            .get_admin_by_email(&resources.config.seed.admin_email)
            .await?;

        let body = match admin {
            Some(admin) => serde_json::json!({ "exists": true, "email": admin.email }),
            None => serde_json::json!({
                "exists": false,
                "message": "No admin found. Please seed the database."
            }),
        };

        Ok((StatusCode::OK, Json(body)).into_response())
    }

    async fn handle_seed(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = SeedService::new(resources).seed().await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
