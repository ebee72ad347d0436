//! Checkout and order route handlers.
//!
//! The order store performs no authorization; the receipt route enforces
//! that the requesting user owns the order, and hides foreign orders as
//! not-found.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::instrument;

use bodega_core::OrderId;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::order::{Order, OrderLine};
use crate::services::checkout::CheckoutService;
use crate::state::AppState;

/// Response for a successful checkout.
#[derive(Debug, Serialize)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
}

/// An order with its line items.
#[derive(Debug, Serialize)]
pub struct OrderReceipt {
    pub order: Order,
    pub items: Vec<OrderLine>,
}

/// Convert the user's cart into an order.
///
/// Responds 409 with "Your cart is empty." when there is nothing to check
/// out; no order is created in that case.
#[instrument(skip(state))]
pub async fn checkout(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<impl IntoResponse> {
    let service = CheckoutService::new(state.pool());
    let order_id = service.checkout(user.id).await?;

    tracing::info!(user_id = %user.id, order_id = %order_id, "order placed");

    Ok((StatusCode::CREATED, Json(CheckoutReceipt { order_id })))
}

/// List the user's orders, newest first.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool());
    Ok(Json(orders.list_for_user(user.id).await?))
}

/// Display an order receipt. Only the owner sees it; anything else is
/// not-found.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
) -> Result<Json<OrderReceipt>> {
    let repo = OrderRepository::new(state.pool());
    let id = OrderId::new(id);

    let order = repo
        .get(id)
        .await?
        .filter(|order| order.user_id == user.id)
        .ok_or_else(|| AppError::NotFound("Order not found.".to_owned()))?;

    let items = repo.items(id).await?;

    Ok(Json(OrderReceipt { order, items }))
}
