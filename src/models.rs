// ABOUTME: Core data models for the storefront API
// ABOUTME: Defines Admin, User, Product, Order and the tagged Identity used by login
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! Record types persisted by the store plus the [`Identity`] variant used
//! by the dual-role login path. `Admin` and `User` deliberately do not
//! implement `Serialize`: password hashes must never be written to a
//! response body, so every client-facing shape is a dedicated type in the
//! routes layer.

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Coarse-grained authorization tier carried in token claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Convert to string for logging and storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrator account. Provisioned only by the seed operation; admins
/// never self-register and carry no profile fields.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Unique admin identifier
    pub id: Uuid,
    /// Email address, stored lowercase and unique within the collection
    pub email: String,
    /// Hashed password for authentication
    pub password_hash: String,
    /// When the account was seeded
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new admin record with a freshly generated id
    #[must_use]
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_lowercase(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Customer account created through registration
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, stored lowercase and unique within the collection
    pub email: String,
    /// Hashed password for authentication
    pub password_hash: String,
    /// Contact phone, empty when never provided
    pub phone: String,
    /// Delivery address, empty when never provided
    pub address: String,
    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with empty optional profile fields
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: email.to_lowercase(),
            password_hash,
            phone: String::new(),
            address: String::new(),
            created_at: Utc::now(),
        }
    }
}

/// Resolved credential identity for the shared login endpoint.
///
/// Login tries the admin collection first, then falls back to users, so
/// precedence is deterministic even if both collections ever held the
/// same email (registration prevents that, login must not rely on it).
#[derive(Debug, Clone)]
pub enum Identity {
    Admin(Admin),
    User(User),
}

impl Identity {
    /// Subject id for token claims
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Admin(admin) => admin.id,
            Self::User(user) => user.id,
        }
    }

    /// Stored (lowercase) email
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Admin(admin) => &admin.email,
            Self::User(user) => &user.email,
        }
    }

    /// Stored password hash to verify against
    #[must_use]
    pub fn password_hash(&self) -> &str {
        match self {
            Self::Admin(admin) => &admin.password_hash,
            Self::User(user) => &user.password_hash,
        }
    }

    /// Role claim for tokens issued to this identity
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Admin(_) => Role::Admin,
            Self::User(_) => Role::User,
        }
    }
}

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// URL-friendly identifier, unique across the catalog
    pub slug: String,
    pub description: String,
    /// Selling price; recomputed as `actual_price + margin_price` whenever
    /// either component is updated
    pub price: f64,
    pub actual_price: f64,
    pub margin_price: f64,
    pub stock_quantity: i64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with zeroed pricing components
    #[must_use]
    pub fn new(name: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            description: String::new(),
            price: 0.0,
            actual_price: 0.0,
            margin_price: 0.0,
            stock_quantity: 0,
            images: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Recompute the selling price from its components
    pub fn recalculate_price(&mut self) {
        self.price = self.actual_price + self.margin_price;
    }
}

/// Order fulfillment state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(AppError::invalid_input(
                crate::constants::error_messages::ORDER_STATUS_INVALID,
            )),
        }
    }
}

/// Customer order. Placed without authentication; managed by admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Line items as submitted by the storefront client
    pub items: Vec<serde_json::Value>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order in the initial `pending` state
    #[must_use]
    pub fn new(
        customer_name: String,
        email: String,
        phone: String,
        address: String,
        items: Vec<serde_json::Value>,
        total: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name,
            email,
            phone,
            address,
            items,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "Asha".into(),
            "Asha@Example.COM".into(),
            "$2b$10$hash".into(),
        );
        assert_eq!(user.email, "asha@example.com");
        assert_eq!(user.phone, "");
        assert_eq!(user.address, "");
    }

    #[test]
    fn test_identity_role_and_precedence_fields() {
        let admin = Admin::new("root@example.com".into(), "h1".into());
        let user = User::new("A".into(), "a@example.com".into(), "h2".into());

        let id = Identity::Admin(admin.clone());
        assert_eq!(id.role(), Role::Admin);
        assert_eq!(id.email(), "root@example.com");
        assert_eq!(id.id(), admin.id);

        let id = Identity::User(user.clone());
        assert_eq!(id.role(), Role::User);
        assert_eq!(id.password_hash(), "h2");
    }

    #[test]
    fn test_product_price_recalculation() {
        let mut product = Product::new("Box".into(), "box".into());
        product.actual_price = 120.0;
        product.margin_price = 30.0;
        product.recalculate_price();
        assert!((product.price - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_order_status_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("unknown".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new(
            "B Kumar".into(),
            "b@example.com".into(),
            "+1 555".into(),
            "12 Lane".into(),
            vec![serde_json::json!({"sku": "box", "qty": 2})],
            598.0,
        );
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("customerName").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "pending");
    }
}
