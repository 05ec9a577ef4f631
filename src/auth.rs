// ABOUTME: JWT token issuance/verification and bcrypt password hashing
// ABOUTME: Both are constructed from explicit configuration, never ambient state
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Authentication Primitives
//!
//! [`AuthManager`] signs and validates the stateless bearer tokens used by
//! every authenticated endpoint. Tokens are HS256 JWTs signed with a
//! process-wide secret loaded once at startup; rotating the secret
//! invalidates all outstanding tokens. Verification collapses every
//! failure mode (bad signature, malformed token, expired) into a single
//! error so responses cannot leak token internals.
//!
//! [`PasswordHasher`] wraps bcrypt with a configured work factor. Hashing
//! and verification run on the blocking thread pool so sibling requests
//! are not stalled.

use crate::constants::error_messages;
use crate::errors::{AppError, AppResult};
use crate::models::Role;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity (admin or user id)
    pub sub: String,
    /// Email at issue time
    pub email: String,
    /// Role of the matched collection at login/registration
    pub role: Role,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Signs and validates bearer tokens with a process-wide secret
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager from explicit configuration
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Issue a signed token for the given identity
    ///
    /// # Errors
    ///
    /// Returns an error if JWT encoding fails; this is an internal
    /// failure, never a client validation problem.
    pub fn issue_token(&self, subject: Uuid, email: &str, role: Role) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            email: email.to_owned(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.token_expiry_hours)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))
    }

    /// Validate a token and return its claims.
    ///
    /// Expired, tampered, and malformed tokens are indistinguishable to
    /// the caller; the underlying reason is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::auth_invalid`] for any verification failure.
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {e}");
                AppError::auth_invalid(error_messages::INVALID_TOKEN)
            })
    }
}

/// bcrypt wrapper with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the configured work factor
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password on the blocking thread pool
    ///
    /// # Errors
    ///
    /// Hashing failure is an internal error, not a validation error.
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))
    }

    /// Verify a plaintext password against a stored hash. bcrypt's
    /// comparison is constant-time with respect to the hash contents.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the stored hash is unparseable.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password verification error: {e}")))
    }
}

/// Canonicalize a phone number for comparison during password reset.
///
/// Strips whitespace, parentheses, and hyphens; digits and `+` survive,
/// so `"+1 (555) 123-4567"` and `"+15551234567"` compare equal.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &[u8] = b"unit-test-secret";

    #[test]
    fn test_token_round_trip() {
        let manager = AuthManager::new(TEST_SECRET, 12);
        let subject = Uuid::new_v4();

        let token = manager
            .issue_token(subject, "asha@example.com", Role::User)
            .unwrap();
        let claims = manager.verify_token(&token).unwrap();

        assert_eq!(claims.sub, subject.to_string());
        assert_eq!(claims.email, "asha@example.com");
        assert_eq!(claims.role, Role::User);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = AuthManager::new(TEST_SECRET, -1);
        let token = manager
            .issue_token(Uuid::new_v4(), "late@example.com", Role::User)
            .unwrap();

        let err = manager.verify_token(&token).unwrap_err();
        assert_eq!(err.message, error_messages::INVALID_TOKEN);
    }

    #[test]
    fn test_tampered_and_malformed_tokens_fail_identically() {
        let manager = AuthManager::new(TEST_SECRET, 12);
        let other = AuthManager::new(b"some-other-secret", 12);

        let foreign = other
            .issue_token(Uuid::new_v4(), "x@example.com", Role::Admin)
            .unwrap();
        let forged = manager.verify_token(&foreign).unwrap_err();
        let garbage = manager.verify_token("not.a.token").unwrap_err();

        assert_eq!(forged.code, garbage.code);
        assert_eq!(forged.message, garbage.message);
    }

    #[tokio::test]
    async fn test_password_hash_and_verify() {
        // minimum bcrypt cost keeps the test fast
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("secret1").await.unwrap();

        assert!(hasher.verify("secret1", &hash).await.unwrap());
        assert!(!hasher.verify("secret2", &hash).await.unwrap());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(normalize_phone("+15551234567"), "+15551234567");
        assert_eq!(normalize_phone(""), "");

        // idempotent
        let once = normalize_phone("(020) 7946-0018");
        assert_eq!(normalize_phone(&once), once);
    }
}
