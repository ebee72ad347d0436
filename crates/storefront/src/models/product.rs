//! Catalog domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bodega_core::{CategoryId, ProductId, UserId};

/// A product category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// A catalog product (domain type).
///
/// `price` and `stock` are point-in-time values: listings show the current
/// price, while committed orders carry their own frozen copies. Stock is
/// informational only and is not decremented by checkout.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// User who created the product and may mutate it.
    pub owner: UserId,
    /// Category the product belongs to.
    pub category_id: CategoryId,
    /// Joined category display name.
    pub category_name: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Current unit price. Never negative.
    pub price: f64,
    /// Image URL for display; may be empty.
    pub image_url: String,
    /// Units on hand, display only.
    pub stock: i64,
    /// When the product was listed.
    pub created: DateTime<Utc>,
}

/// Fields for creating or updating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub stock: i64,
}
