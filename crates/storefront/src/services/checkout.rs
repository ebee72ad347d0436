//! Checkout service: converts a cart into an order.

use sqlx::SqlitePool;
use thiserror::Error;

use bodega_core::{OrderId, UserId};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with no cart lines. Recoverable: the caller
    /// sends the user back to the catalog.
    #[error("cart is empty")]
    EmptyCart,

    /// Repository/database error. The checkout transaction has rolled back;
    /// the cart is unchanged.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Checkout service.
///
/// Checkout is not idempotent: each call with a non-empty cart produces a
/// distinct order, and there is no deduplication of rapid double
/// submissions beyond the transaction-level claim (the loser of a race sees
/// an empty cart).
pub struct CheckoutService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Convert the user's current cart into an order and clear the cart.
    ///
    /// Returns the new order's id.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the user has no cart lines.
    /// Returns `CheckoutError::Repository` if the transaction fails; no
    /// partial order persists and the cart keeps its lines.
    pub async fn checkout(&self, user_id: UserId) -> Result<OrderId, CheckoutError> {
        self.orders
            .create_from_cart(user_id)
            .await?
            .ok_or(CheckoutError::EmptyCart)
    }
}
