// ABOUTME: Middleware module organization for request authentication and CORS
// ABOUTME: Re-exports the per-role bearer-token guards used by protected routes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! HTTP middleware

/// Bearer-token authentication guards, one per role
pub mod auth;
/// CORS layer configuration
pub mod cors;

pub use auth::{authenticate_admin, authenticate_user, AuthenticatedAdmin, AuthenticatedUser};
pub use cors::setup_cors;
