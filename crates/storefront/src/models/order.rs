//! Order domain types.
//!
//! An [`Order`] and its [`OrderLine`]s are immutable once written: no code
//! path updates an existing order's lines or total.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bodega_core::{OrderId, OrderStatus, ProductId, UserId};

/// A committed order header.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// User the order belongs to.
    pub user_id: UserId,
    /// When the order was placed.
    pub created: DateTime<Utc>,
    /// Order status.
    pub status: OrderStatus,
    /// Sum of `quantity * price_each` over the line items, frozen at
    /// checkout.
    pub total: f64,
}

/// A line item of a committed order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Product name at read time (joined for display).
    pub product_name: String,
    /// Quantity purchased.
    pub quantity: i64,
    /// Unit price frozen at checkout; independent of the product's current
    /// price.
    pub price_each: f64,
}
