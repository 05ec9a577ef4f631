// ABOUTME: SQLite implementation of the StoreProvider trait using sqlx
// ABOUTME: Stores ids as TEXT uuids and document-shaped fields as JSON text
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! SQLite store implementation
//!
//! Uniqueness is enforced per table (users.email, admins.email,
//! products.slug). There is no compound unique constraint spanning both
//! identity tables, so the cross-collection email invariant is upheld by
//! the auth core's check-then-insert sequence, which is not atomic under
//! concurrent registration.

use super::StoreProvider;
use crate::models::{Admin, Order, OrderStatus, Product, User};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

/// SQLite-backed store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (and create if missing) the database at `database_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the connection fails.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database URL: {database_url}"))?
            .create_if_missing(true);

        // A pooled in-memory database is per-connection; cap the pool at
        // one so every query sees the same schema.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .context("failed to open SQLite database")?;

        Ok(Self { pool })
    }

    /// Access the underlying pool (tests)
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("malformed id in store: {raw}"))
}

fn row_to_admin(row: &SqliteRow) -> Result<Admin> {
    Ok(Admin {
        id: parse_id(&row.try_get::<String, _>("id")?)?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_user(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: parse_id(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_product(row: &SqliteRow) -> Result<Product> {
    let images: String = row.try_get("images")?;
    Ok(Product {
        id: parse_id(&row.try_get::<String, _>("id")?)?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        actual_price: row.try_get("actual_price")?,
        margin_price: row.try_get("margin_price")?,
        stock_quantity: row.try_get("stock_quantity")?,
        images: serde_json::from_str(&images).context("malformed images JSON in store")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_order(row: &SqliteRow) -> Result<Order> {
    let items: String = row.try_get("items")?;
    let status: String = row.try_get("status")?;
    Ok(Order {
        id: parse_id(&row.try_get::<String, _>("id")?)?,
        customer_name: row.try_get("customer_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        items: serde_json::from_str(&items).context("malformed items JSON in store")?,
        total: row.try_get("total")?,
        status: OrderStatus::from_str(&status)
            .map_err(|_| anyhow::anyhow!("malformed order status in store: {status}"))?,
        created_at: row.try_get("created_at")?,
    })
}

const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS admins (
        id TEXT PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        phone TEXT NOT NULL DEFAULT '',
        address TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL DEFAULT '',
        price REAL NOT NULL DEFAULT 0,
        actual_price REAL NOT NULL DEFAULT 0,
        margin_price REAL NOT NULL DEFAULT 0,
        stock_quantity INTEGER NOT NULL DEFAULT 0,
        images TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY,
        customer_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        address TEXT NOT NULL,
        items TEXT NOT NULL,
        total REAL NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        created_at TEXT NOT NULL
    )
    ",
];

#[async_trait]
impl StoreProvider for SqliteStore {
    async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("schema migration failed")?;
        }
        Ok(())
    }

    async fn create_admin(&self, admin: &Admin) -> Result<()> {
        sqlx::query(
            "INSERT INTO admins (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(admin.id.to_string())
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let row = sqlx::query("SELECT * FROM admins WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_admin).transpose()
    }

    async fn delete_all_admins(&self) -> Result<()> {
        sqlx::query("DELETE FROM admins").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, phone, address, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(user.id)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_user).transpose()
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        sqlx::query("UPDATE users SET name = ?, email = ?, phone = ?, address = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.address)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn user_count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        sqlx::query(
            "INSERT INTO products
             (id, name, slug, description, price, actual_price, margin_price, stock_quantity, images, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.actual_price)
        .bind(product.margin_price)
        .bind(product.stock_quantity)
        .bind(serde_json::to_string(&product.images)?)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_product(&self, product_id: Uuid) -> Result<Option<Product>> {
        let row = sqlx::query("SELECT * FROM products WHERE id = ?")
            .bind(product_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_product).transpose()
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let row = sqlx::query("SELECT * FROM products WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_product).transpose()
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT * FROM products ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_product).collect()
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        sqlx::query(
            "UPDATE products SET name = ?, slug = ?, description = ?, price = ?,
             actual_price = ?, margin_price = ?, stock_quantity = ?, images = ? WHERE id = ?",
        )
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.actual_price)
        .bind(product.margin_price)
        .bind(product.stock_quantity)
        .bind(serde_json::to_string(&product.images)?)
        .bind(product.id.to_string())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_products(&self) -> Result<()> {
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn create_order(&self, order: &Order) -> Result<()> {
        sqlx::query(
            "INSERT INTO orders
             (id, customer_name, email, phone, address, items, total, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(order.id.to_string())
        .bind(&order.customer_name)
        .bind(&order.email)
        .bind(&order.phone)
        .bind(&order.address)
        .bind(serde_json::to_string(&order.items)?)
        .bind(order.total)
        .bind(order.status.as_str())
        .bind(order.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_order(&self, order_id: Uuid) -> Result<Option<Order>> {
        let row = sqlx::query("SELECT * FROM orders WHERE id = ?")
            .bind(order_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_order).transpose()
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT * FROM orders ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_order).collect()
    }

    async fn update_order_status(&self, order_id: Uuid, status: OrderStatus) -> Result<()> {
        sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(order_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
