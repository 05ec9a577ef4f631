// ABOUTME: Order route handlers for public placement and admin fulfillment tracking
// ABOUTME: Order creation is unauthenticated; listing and status updates are admin-only
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Order routes

use crate::constants::error_messages;
use crate::database::StoreProvider;
use crate::errors::AppError;
use crate::middleware::authenticate_admin;
use crate::models::{Order, OrderStatus};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Order placement request, submitted by the storefront checkout
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub items: Option<Vec<serde_json::Value>>,
    pub total: Option<f64>,
}

/// Fulfillment status update
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

fn parse_order_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(error_messages::ORDER_NOT_FOUND))
}

/// Order routes
pub struct OrderRoutes;

impl OrderRoutes {
    /// Create all order routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/orders", post(Self::handle_create))
            .route("/api/orders", get(Self::handle_list))
            .route("/api/orders/:id", get(Self::handle_get))
            .route("/api/orders/:id", patch(Self::handle_update_status))
            .with_state(resources)
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateOrderRequest>,
    ) -> Result<Response, AppError> {
        let (Some(customer_name), Some(email), Some(phone), Some(address), Some(items), Some(total)) = (
            request.customer_name.filter(|v| !v.is_empty()),
            request.email.filter(|v| !v.is_empty()),
            request.phone.filter(|v| !v.is_empty()),
            request.address.filter(|v| !v.is_empty()),
            request.items,
            request.total,
        ) else {
            return Err(AppError::invalid_input(error_messages::ORDER_FIELDS_REQUIRED));
        };

        if items.is_empty() {
            return Err(AppError::invalid_input(error_messages::ORDER_ITEMS_REQUIRED));
        }

        let order = Order::new(customer_name, email, phone, address, items, total);
        resources.database.create_order(&order).await?;
        info!("Order placed: {} total={}", order.id, order.total);

        Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": order.id, "order": order })),
        )
            .into_response())
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        authenticate_admin(&headers, &resources)?;

        let orders = resources.database.list_orders().await?;
        Ok((StatusCode::OK, Json(orders)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        authenticate_admin(&headers, &resources)?;

        let order = resources
            .database
            .get_order(parse_order_id(&id)?)
            .await?
            .ok_or_else(|| AppError::not_found(error_messages::ORDER_NOT_FOUND))?;

        Ok((StatusCode::OK, Json(order)).into_response())
    }

    async fn handle_update_status(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        Json(request): Json<UpdateStatusRequest>,
    ) -> Result<Response, AppError> {
        authenticate_admin(&headers, &resources)?;

        let status: OrderStatus = request
            .status
            .as_deref()
            .ok_or_else(|| AppError::invalid_input(error_messages::ORDER_STATUS_INVALID))?
            .parse()?;

        let mut order = resources
            .database
            .get_order(parse_order_id(&id)?)
            .await?
            .ok_or_else(|| AppError::not_found(error_messages::ORDER_NOT_FOUND))?;

        resources.database.update_order_status(order.id, status).await?;
        order.status = status;
        info!("Order {} status set to {status}", order.id);

        Ok((StatusCode::OK, Json(order)).into_response())
    }
}
