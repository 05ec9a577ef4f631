// ABOUTME: User profile route handlers for authenticated customers
// ABOUTME: Provides profile read and partial update, never exposing the password hash
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! User profile routes
//!
//! Both endpoints require a user bearer token. Responses use a dedicated
//! shape so the stored password hash can never leak into a body.

use crate::constants::error_messages;
use crate::database::StoreProvider;
use crate::errors::AppError;
use crate::middleware::authenticate_user;
use crate::models::User;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Partial profile update. `name`/`email` are ignored when empty;
/// `phone`/`address` may be set to the empty string deliberately.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// User profile as returned to the client (no password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            created_at: user.created_at,
        }
    }
}

/// User profile routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/user/profile", get(Self::handle_get_profile))
            .route("/api/user/profile", put(Self::handle_update_profile))
            .with_state(resources)
    }

    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate_user(&headers, &resources).await?;

        let user = resources
            .database
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(error_messages::USER_NOT_FOUND))?;

        Ok((StatusCode::OK, Json(ProfileResponse::from(user))).into_response())
    }

    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<UpdateProfileRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate_user(&headers, &resources).await?;

        let mut user = resources
            .database
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(error_messages::USER_NOT_FOUND))?;

        if let Some(name) = request.name.filter(|n| !n.is_empty()) {
            user.name = name;
        }

        if let Some(email) = request.email.filter(|e| !e.is_empty()) {
            let email = email.to_lowercase();
            if email != user.email {
                // The same cross-collection invariant as registration:
                // the new email must be unused by admins AND other users.
                let taken_by_admin = resources
                    .database
                    .get_admin_by_email(&email)
                    .await?
                    .is_some();
                let taken_by_user = resources
                    .database
                    .get_user_by_email(&email)
                    .await?
                    .is_some_and(|other| other.id != user.id);

                if taken_by_admin || taken_by_user {
                    return Err(AppError::conflict(error_messages::EMAIL_EXISTS));
                }
                user.email = email;
            }
        }

        if let Some(phone) = request.phone {
            user.phone = phone;
        }
        if let Some(address) = request.address {
            user.address = address;
        }

        resources.database.update_user(&user).await?;
        info!("Profile updated for user: {}", user.id);

        Ok((StatusCode::OK, Json(ProfileResponse::from(user))).into_response())
    }
}
