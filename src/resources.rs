// ABOUTME: Shared server resources passed to every route handler
// ABOUTME: Bundles the store, token manager, password hasher, and configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Shared server resources
//!
//! Constructed once at startup and shared behind an `Arc` as axum router
//! state. Everything here is immutable after construction; handlers never
//! reach into ambient process state.

use crate::auth::{AuthManager, PasswordHasher};
use crate::config::environment::ServerConfig;
use crate::database::SqliteStore;

/// Immutable bundle of collaborators for request handling
pub struct ServerResources {
    /// Persistence backend
    pub database: SqliteStore,
    /// Token issuer/verifier
    pub auth_manager: AuthManager,
    /// bcrypt wrapper at the configured work factor
    pub password_hasher: PasswordHasher,
    /// Startup configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Create the resource bundle from already-initialized collaborators
    #[must_use]
    pub fn new(database: SqliteStore, config: ServerConfig) -> Self {
        let auth_manager = AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.jwt_expiry_hours,
        );
        let password_hasher = PasswordHasher::new(config.auth.bcrypt_cost);

        Self {
            database,
            auth_manager,
            password_hasher,
            config,
        }
    }
}
