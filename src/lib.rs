// ABOUTME: Main library entry point for the storefront API server
// ABOUTME: REST backend for catalog browsing, orders, and dual-role authentication
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Storefront Server
//!
//! A small e-commerce backend exposing REST endpoints for product catalog
//! browsing, order placement/tracking, and dual-role authentication
//! (admin and customer).
//!
//! ## Architecture
//!
//! - **Auth**: JWT issuance/verification and bcrypt password hashing
//! - **Database**: `StoreProvider` persistence seam with a SQLite backend
//! - **Routes**: axum handlers organized by domain
//! - **Middleware**: per-role bearer-token guards and CORS
//! - **Config**: immutable environment-based configuration
//!
//! Admins and customers share one login endpoint; the admin collection is
//! consulted first and the issued token's role claim records which
//! collection matched. Admin accounts are provisioned only by the seed
//! endpoint.

/// JWT token management and password hashing
pub mod auth;

/// Configuration management
pub mod config;

/// Application constants and stable error messages
pub mod constants;

/// Persistence abstraction and SQLite backend
pub mod database;

/// Unified error handling system
pub mod errors;

/// Logging configuration and setup
pub mod logging;

/// Request authentication guards and CORS
pub mod middleware;

/// Core data models
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;
