// ABOUTME: Application constants and configuration values for the storefront API
// ABOUTME: Centralizes limits, stable error messages, and seed defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Error messages that are part of the API contract live here so that
//! handlers cannot drift apart in wording. Login and password-reset
//! failures intentionally reuse one message across distinct root causes.

/// Operational limits and fixed parameters
pub mod limits {
    /// Bearer token lifetime for all issued tokens
    pub const TOKEN_EXPIRY_HOURS: i64 = 12;

    /// bcrypt work factor for password hashing
    pub const DEFAULT_BCRYPT_COST: u32 = 10;

    /// Minimum accepted length for a new password (password reset)
    pub const MIN_PASSWORD_LENGTH: usize = 6;

    /// Default HTTP port when `PORT` is not set
    pub const DEFAULT_HTTP_PORT: u16 = 5000;

    /// Maximum accepted JSON request body size in bytes
    pub const MAX_JSON_BODY_BYTES: usize = 1024 * 1024;

    /// Per-request timeout applied at the router level
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Client-facing error messages that form part of the API contract
pub mod error_messages {
    /// Login failure. Identical for unknown admin, unknown user, and wrong
    /// password so responses cannot be used to enumerate accounts.
    pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

    /// Registration rejected because the email exists in either collection
    pub const EMAIL_IN_USE: &str = "Email is already in use";

    /// Profile update rejected because the new email is taken
    pub const EMAIL_EXISTS: &str = "Email already exists";

    /// Registration input validation
    pub const REGISTER_FIELDS_REQUIRED: &str = "Name, email and password are required";

    /// Login input validation
    pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";

    /// Password reset input validation
    pub const RESET_FIELDS_REQUIRED: &str = "Email, phone and new password are required";

    /// Password reset rejected for a too-short replacement password
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

    /// Password reset failure. Identical for unknown email and phone
    /// mismatch so the response does not reveal which field was wrong.
    pub const RESET_MISMATCH: &str = "Email and phone do not match any account";

    /// Missing or malformed Authorization header
    pub const NO_TOKEN: &str = "No token provided";

    /// Any bearer token verification failure (signature, expiry, format)
    pub const INVALID_TOKEN: &str = "Invalid or expired token";

    /// Authenticated user no longer exists in the store
    pub const USER_NOT_FOUND: &str = "User not found";

    pub const PRODUCT_NOT_FOUND: &str = "Product not found";
    pub const SLUG_IN_USE: &str = "Product with this slug already exists";
    pub const PRODUCT_FIELDS_REQUIRED: &str = "Name and slug are required";

    pub const ORDER_NOT_FOUND: &str = "Order not found";
    pub const ORDER_FIELDS_REQUIRED: &str = "All fields are required";
    pub const ORDER_ITEMS_REQUIRED: &str = "Items array is required and cannot be empty";
    pub const ORDER_STATUS_INVALID: &str = "Valid status is required";

    /// Generic 500 body; collaborator failure details never reach clients
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

/// Defaults used by the one-time seed endpoint
pub mod defaults {
    /// Well-known admin account provisioned by seeding
    pub const SEED_ADMIN_EMAIL: &str = "admin@storefront.local";

    /// Fallback admin password when `ADMIN_PASSWORD` is not set
    pub const SEED_ADMIN_PASSWORD: &str = "admin123";

    /// Demo catalog entry inserted by seeding
    pub const DEMO_PRODUCT_NAME: &str = "Premium Sampler Box";
    pub const DEMO_PRODUCT_SLUG: &str = "premium-sampler-box";
    pub const DEMO_PRODUCT_DESCRIPTION: &str =
        "A curated box of our most popular snacks. Perfect for first-time customers!";
    pub const DEMO_PRODUCT_PRICE: f64 = 299.0;
}

/// Service identification for logging
pub mod service_names {
    pub const STOREFRONT_SERVER: &str = "storefront-server";
}
