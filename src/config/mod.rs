// ABOUTME: Configuration module organization for the storefront API
// ABOUTME: Environment-based configuration is the only supported source
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management

/// Environment-based server configuration
pub mod environment;
