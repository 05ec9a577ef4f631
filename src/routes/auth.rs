// ABOUTME: Authentication route handlers for registration, dual-role login, and password reset
// ABOUTME: Thin axum handlers delegating to AuthService for the contract logic
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Authentication routes
//!
//! One login endpoint serves both roles: the email is resolved to a
//! tagged [`Identity`] by trying the admin collection first and falling
//! back to users, and the role claim in the issued token reflects which
//! collection matched. Every security-sensitive failure path in this
//! module reuses a single message per operation so the API cannot be
//! used to enumerate accounts.

use crate::auth::normalize_phone;
use crate::constants::{error_messages, limits};
use crate::database::StoreProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{Identity, Role, User};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
}

/// User registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub token: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Login request, shared by both roles
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response. Admin responses carry no profile fields; user
/// responses include name, phone, and address with empty-string
/// defaults. The asymmetry is part of the API contract.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Password reset request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub new_password: Option<String>,
}

/// Password reset acknowledgement; deliberately carries no token, the
/// caller must log in again
#[derive(Debug, Serialize)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub message: String,
}

/// Reject absent or empty mandatory fields with the operation's message
fn require<'a>(field: Option<&'a String>, message: &'static str) -> AppResult<&'a str> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::invalid_input(message)),
    }
}

/// Authentication service for business logic
#[derive(Clone)]
pub struct AuthService {
    resources: Arc<ServerResources>,
}

impl AuthService {
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Resolve a lowercase email to a credential identity.
    ///
    /// Admin takes precedence over user. Registration keeps the two
    /// collections disjoint, but resolution must stay deterministic even
    /// if that invariant were ever violated out-of-band.
    async fn find_identity(&self, email: &str) -> AppResult<Option<Identity>> {
        if let Some(admin) = self.resources.database.get_admin_by_email(email).await? {
            return Ok(Some(Identity::Admin(admin)));
        }
        if let Some(user) = self.resources.database.get_user_by_email(email).await? {
            return Ok(Some(Identity::User(user)));
        }
        Ok(None)
    }

    /// Handle user registration
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing fields, a conflict error
    /// when the email exists in either collection, and an internal error
    /// for store or hashing failures.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        let name = require(request.name.as_ref(), error_messages::REGISTER_FIELDS_REQUIRED)?;
        let email = require(request.email.as_ref(), error_messages::REGISTER_FIELDS_REQUIRED)?;
        let password =
            require(request.password.as_ref(), error_messages::REGISTER_FIELDS_REQUIRED)?;

        let email = email.to_lowercase();
        info!("User registration attempt for email: {email}");

        // The email must be unused across BOTH collections even though
        // each table only enforces uniqueness within itself. This
        // check-then-insert sequence is not atomic against a concurrent
        // registration with the same email; the store's per-table unique
        // constraint is the only backstop.
        if self.find_identity(&email).await?.is_some() {
            return Err(AppError::conflict(error_messages::EMAIL_IN_USE));
        }

        let password_hash = self.resources.password_hasher.hash(password).await?;

        let mut user = User::new(name.to_owned(), email, password_hash);
        if let Some(phone) = request.phone {
            user.phone = phone;
        }

        let user_id = self.resources.database.create_user(&user).await?;

        let token = self
            .resources
            .auth_manager
            .issue_token(user_id, &user.email, Role::User)?;

        info!("User registered successfully: {} ({user_id})", user.email);

        Ok(RegisterResponse {
            token,
            email: user.email,
            name: user.name,
            role: Role::User,
        })
    }

    /// Handle login for both roles
    ///
    /// # Errors
    ///
    /// The three failure causes - no admin match, no user match, wrong
    /// password - return byte-identical 401 responses.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let email = require(request.email.as_ref(), error_messages::LOGIN_FIELDS_REQUIRED)?;
        let password = require(request.password.as_ref(), error_messages::LOGIN_FIELDS_REQUIRED)?;

        let email = email.to_lowercase();
        info!("Login attempt for email: {email}");

        let Some(identity) = self.find_identity(&email).await? else {
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        };

        let password_valid = self
            .resources
            .password_hasher
            .verify(password, identity.password_hash())
            .await?;

        if !password_valid {
            warn!("Invalid password for email: {email}");
            return Err(AppError::auth_invalid(error_messages::INVALID_CREDENTIALS));
        }

        let token = self.resources.auth_manager.issue_token(
            identity.id(),
            identity.email(),
            identity.role(),
        )?;

        info!("Login successful: {} role={}", identity.email(), identity.role());

        Ok(match identity {
            Identity::Admin(admin) => LoginResponse {
                token,
                email: admin.email,
                role: Role::Admin,
                name: None,
                phone: None,
                address: None,
            },
            Identity::User(user) => LoginResponse {
                token,
                email: user.email,
                role: Role::User,
                name: Some(user.name),
                phone: Some(user.phone),
                address: Some(user.address),
            },
        })
    }

    /// Handle self-service password reset, verified by phone match
    ///
    /// # Errors
    ///
    /// Unknown email and phone mismatch return byte-identical 404
    /// responses. Admin credentials cannot be reset through this path.
    pub async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> AppResult<ForgotPasswordResponse> {
        let email = require(request.email.as_ref(), error_messages::RESET_FIELDS_REQUIRED)?;
        let new_password = require(
            request.new_password.as_ref(),
            error_messages::RESET_FIELDS_REQUIRED,
        )?;
        // Phone must be present but MAY be empty: an account that never
        // provided a phone resets by submitting the empty string.
        let Some(phone) = request.phone.as_ref() else {
            return Err(AppError::invalid_input(error_messages::RESET_FIELDS_REQUIRED));
        };

        if new_password.chars().count() < limits::MIN_PASSWORD_LENGTH {
            return Err(AppError::invalid_input(error_messages::PASSWORD_TOO_SHORT));
        }

        let email = email.to_lowercase();
        info!("Password reset attempt for email: {email}");

        let user = self.resources.database.get_user_by_email(&email).await?;

        let Some(user) = user else {
            return Err(AppError::not_found(error_messages::RESET_MISMATCH));
        };

        if normalize_phone(phone) != normalize_phone(&user.phone) {
            warn!("Password reset phone mismatch for email: {email}");
            return Err(AppError::not_found(error_messages::RESET_MISMATCH));
        }

        let password_hash = self.resources.password_hasher.hash(new_password).await?;
        self.resources
            .database
            .update_user_password(user.id, &password_hash)
            .await?;

        info!("Password reset successful for user: {}", user.id);

        Ok(ForgotPasswordResponse {
            success: true,
            message: "Password updated successfully. Please log in with your new password.".into(),
        })
    }
}

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/forgot-password", post(Self::handle_forgot_password))
            .with_state(resources)
    }

    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let response = AuthService::new(resources).register(request).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let response = AuthService::new(resources).login(request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_forgot_password(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ForgotPasswordRequest>,
    ) -> Result<Response, AppError> {
        let response = AuthService::new(resources).forgot_password(request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
