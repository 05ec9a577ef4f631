// ABOUTME: Persistence abstraction for the storefront API
// ABOUTME: Defines the StoreProvider trait implemented by the SQLite backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Persistence Layer
//!
//! The application talks to storage exclusively through [`StoreProvider`]:
//! create/find/update/delete by identifier and by filter field. The trait
//! is the seam that keeps the auth core independent of any particular
//! backend; [`sqlite::SqliteStore`] is the shipped implementation.
//!
//! Email lookups expect the caller to have lowercased the input — email
//! normalization is an auth-core responsibility, applied at both write
//! and lookup time, not a storage concern.

use crate::models::{Admin, Order, OrderStatus, Product, User};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Core persistence abstraction trait
#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// Run schema setup; idempotent
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Admin accounts
    // ================================

    /// Create an admin record
    async fn create_admin(&self, admin: &Admin) -> Result<()>;

    /// Find an admin by (lowercase) email
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;

    /// Remove all admin records (seed bootstrap only)
    async fn delete_all_admins(&self) -> Result<()>;

    // ================================
    // User accounts
    // ================================

    /// Create a user record, returning its id
    async fn create_user(&self, user: &User) -> Result<Uuid>;

    /// Find a user by id
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Find a user by (lowercase) email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Persist profile fields (name, email, phone, address)
    async fn update_user(&self, user: &User) -> Result<()>;

    /// Replace a user's password hash; the only field password reset touches
    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()>;

    /// Total number of user accounts
    async fn user_count(&self) -> Result<i64>;

    // ================================
    // Catalog
    // ================================

    async fn create_product(&self, product: &Product) -> Result<()>;

    async fn get_product(&self, product_id: Uuid) -> Result<Option<Product>>;

    /// Find a product by its unique slug
    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>>;

    /// All products, newest first
    async fn list_products(&self) -> Result<Vec<Product>>;

    async fn update_product(&self, product: &Product) -> Result<()>;

    /// Returns `false` when no such product existed
    async fn delete_product(&self, product_id: Uuid) -> Result<bool>;

    /// Remove all products (seed bootstrap only)
    async fn delete_all_products(&self) -> Result<()>;

    // ================================
    // Orders
    // ================================

    async fn create_order(&self, order: &Order) -> Result<()>;

    async fn get_order(&self, order_id: Uuid) -> Result<Option<Order>>;

    /// All orders, newest first
    async fn list_orders(&self) -> Result<Vec<Order>>;

    async fn update_order_status(&self, order_id: Uuid, status: OrderStatus) -> Result<()>;
}
