//! Cart repository: the per-user cart ledger.
//!
//! One row per (user, product), enforced by the UNIQUE constraint. All
//! mutations are single statements, so there is no read-modify-write window
//! for concurrent requests (multiple tabs, multiple devices) to race
//! through.

use sqlx::SqlitePool;

use bodega_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::cart::CartLine;

/// Database row for a cart line joined with its product.
#[derive(sqlx::FromRow)]
struct CartLineRow {
    product_id: i64,
    quantity: i64,
    name: String,
    price: f64,
    image_url: String,
}

impl From<CartLineRow> for CartLine {
    fn from(r: CartLineRow) -> Self {
        Self {
            product_id: ProductId::new(r.product_id),
            quantity: r.quantity,
            name: r.name,
            price: r.price,
            image_url: r.image_url,
        }
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Add `qty` of a product to a user's cart.
    ///
    /// Merge-add semantics: if a line for (user, product) already exists its
    /// quantity is incremented by `qty`, otherwise a new line is created.
    /// The insert-or-increment is a single statement, so concurrent adds for
    /// the same (user, product) pair cannot lose updates.
    ///
    /// Callers must pass a positive quantity; the HTTP layer normalizes a
    /// missing or non-positive requested quantity to 1. The product id is
    /// not validated against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
        qty: i64,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO cart_items (user_id, product_id, quantity)
            VALUES (?, ?, ?)
            ON CONFLICT(user_id, product_id)
            DO UPDATE SET quantity = quantity + excluded.quantity
            ",
        )
        .bind(user_id.as_i64())
        .bind(product_id.as_i64())
        .bind(qty)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Set (not increment) the quantity of a cart line.
    ///
    /// A quantity of zero or below deletes the line (idempotent if it is
    /// already absent). Setting a positive quantity on a line that does not
    /// exist updates zero rows and is a silent no-op; it does not create the
    /// line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn set_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        qty: i64,
    ) -> Result<(), RepositoryError> {
        if qty <= 0 {
            sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND product_id = ?")
                .bind(user_id.as_i64())
                .bind(product_id.as_i64())
                .execute(self.pool)
                .await?;
        } else {
            sqlx::query(
                r"
                UPDATE cart_items
                SET quantity = ?
                WHERE user_id = ? AND product_id = ?
                ",
            )
            .bind(qty)
            .bind(user_id.as_i64())
            .bind(product_id.as_i64())
            .execute(self.pool)
            .await?;
        }

        Ok(())
    }

    /// List a user's cart lines joined with current product data, product
    /// name ascending.
    ///
    /// Prices here are the products' *current* prices; an order freezes its
    /// own copies at checkout. Lines whose product no longer exists are
    /// hidden by the JOIN.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(&self, user_id: UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let rows: Vec<CartLineRow> = sqlx::query_as(
            r"
            SELECT ci.product_id, ci.quantity,
                   p.name, p.price, p.image_url
            FROM cart_items ci
            JOIN products p ON ci.product_id = p.id
            WHERE ci.user_id = ?
            ORDER BY p.name ASC
            ",
        )
        .bind(user_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CartLine::from).collect())
    }

    /// Delete all cart lines for a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(user_id.as_i64())
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
