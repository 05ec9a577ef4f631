// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Builds one immutable ServerConfig at startup; operations never read env vars
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration management
//!
//! The whole configuration is resolved once in [`ServerConfig::from_env`]
//! and then passed by reference into the components that need it. The JWT
//! secret has no default: a process without `JWT_SECRET` must not start.

use crate::constants::{defaults, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `sqlite:data/storefront.db`
    pub url: String,
}

/// Authentication configuration shared by the token issuer and hasher
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide token signing secret; rotating it invalidates all
    /// outstanding tokens
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

/// Credentials provisioned by the one-time seed endpoint
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_email: String,
    pub admin_password: String,
}

/// Complete server configuration, immutable after startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub seed: SeedConfig,
    pub environment: Environment,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is unset or if numeric variables
    /// fail to parse. Either condition is startup-fatal.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("PORT") {
            Ok(port) => port.parse::<u16>().context("PORT must be a valid port number")?,
            Err(_) => limits::DEFAULT_HTTP_PORT,
        };

        let jwt_secret = env::var("JWT_SECRET")
            .context("JWT_SECRET must be set - refusing to start without a token signing key")?;

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(cost) => cost.parse::<u32>().context("BCRYPT_COST must be an integer")?,
            Err(_) => limits::DEFAULT_BCRYPT_COST,
        };

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );

        Ok(Self {
            http_port,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:data/storefront.db".into()),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours: limits::TOKEN_EXPIRY_HOURS,
                bcrypt_cost,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into()),
            },
            seed: SeedConfig {
                admin_email: env::var("ADMIN_EMAIL")
                    .unwrap_or_else(|_| defaults::SEED_ADMIN_EMAIL.into()),
                admin_password: env::var("ADMIN_PASSWORD")
                    .unwrap_or_else(|_| defaults::SEED_ADMIN_PASSWORD.into()),
            },
            environment,
        })
    }

    /// One-line startup summary safe to log (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} http_port={} database={} cors_origins={}",
            self.environment, self.http_port, self.database.url, self.cors.allowed_origins
        )
    }
}
