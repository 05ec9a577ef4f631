// ABOUTME: Catalog route handlers for public browsing and admin product management
// ABOUTME: Reads are public; create/update/delete require an admin bearer token
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Catalog routes
//!
//! The selling price is always derived: `price = actual_price +
//! margin_price`, recomputed on every create and update that touches a
//! pricing component.

use crate::constants::error_messages;
use crate::database::StoreProvider;
use crate::errors::AppError;
use crate::middleware::authenticate_admin;
use crate::models::Product;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Product creation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub actual_price: Option<f64>,
    pub margin_price: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub images: Option<Vec<String>>,
}

/// Partial product update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub actual_price: Option<f64>,
    pub margin_price: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub images: Option<Vec<String>>,
}

fn parse_product_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(error_messages::PRODUCT_NOT_FOUND))
}

/// Catalog routes
pub struct ProductRoutes;

impl ProductRoutes {
    /// Create all catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/products", get(Self::handle_list))
            .route("/api/products/:id", get(Self::handle_get))
            .route("/api/products", post(Self::handle_create))
            .route("/api/products/:id", put(Self::handle_update))
            .route("/api/products/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let products = resources.database.list_products().await?;
        Ok((StatusCode::OK, Json(products)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let product = resources
            .database
            .get_product(parse_product_id(&id)?)
            .await?
            .ok_or_else(|| AppError::not_found(error_messages::PRODUCT_NOT_FOUND))?;

        Ok((StatusCode::OK, Json(product)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(request): Json<CreateProductRequest>,
    ) -> Result<Response, AppError> {
        authenticate_admin(&headers, &resources)?;

        let (Some(name), Some(slug)) = (
            request.name.filter(|n| !n.is_empty()),
            request.slug.filter(|s| !s.is_empty()),
        ) else {
            return Err(AppError::invalid_input(error_messages::PRODUCT_FIELDS_REQUIRED));
        };

        if resources
            .database
            .get_product_by_slug(&slug)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(error_messages::SLUG_IN_USE));
        }

        let mut product = Product::new(name, slug);
        product.description = request.description.unwrap_or_default();
        product.actual_price = request.actual_price.unwrap_or(0.0);
        product.margin_price = request.margin_price.unwrap_or(0.0);
        product.stock_quantity = request.stock_quantity.unwrap_or(0);
        product.images = request.images.unwrap_or_default();
        product.recalculate_price();

        resources.database.create_product(&product).await?;
        info!("Product created: {} ({})", product.slug, product.id);

        Ok((StatusCode::CREATED, Json(product)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        Json(request): Json<UpdateProductRequest>,
    ) -> Result<Response, AppError> {
        authenticate_admin(&headers, &resources)?;

        let mut product = resources
            .database
            .get_product(parse_product_id(&id)?)
            .await?
            .ok_or_else(|| AppError::not_found(error_messages::PRODUCT_NOT_FOUND))?;

        if let Some(name) = request.name.filter(|n| !n.is_empty()) {
            product.name = name;
        }
        if let Some(slug) = request.slug.filter(|s| !s.is_empty()) {
            if slug != product.slug {
                if resources
                    .database
                    .get_product_by_slug(&slug)
                    .await?
                    .is_some()
                {
                    return Err(AppError::conflict(error_messages::SLUG_IN_USE));
                }
                product.slug = slug;
            }
        }
        if let Some(description) = request.description {
            product.description = description;
        }
        if let Some(actual_price) = request.actual_price {
            product.actual_price = actual_price;
        }
        if let Some(margin_price) = request.margin_price {
            product.margin_price = margin_price;
        }
        if let Some(stock_quantity) = request.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(images) = request.images {
            product.images = images;
        }
        product.recalculate_price();

        resources.database.update_product(&product).await?;
        info!("Product updated: {} ({})", product.slug, product.id);

        Ok((StatusCode::OK, Json(product)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        authenticate_admin(&headers, &resources)?;

        let deleted = resources
            .database
            .delete_product(parse_product_id(&id)?)
            .await?;
        if !deleted {
            return Err(AppError::not_found(error_messages::PRODUCT_NOT_FOUND));
        }

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Product deleted successfully" })),
        )
            .into_response())
    }
}
