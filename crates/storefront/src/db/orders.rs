//! Order repository: checkout and the order read side.
//!
//! Orders and their line items are written exactly once, inside a single
//! transaction, and never mutated afterwards. `price_each` on a line item
//! is the product price at checkout time; later price changes do not touch
//! committed orders.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bodega_core::{OrderId, OrderStatus, ProductId, UserId};

use super::RepositoryError;
use crate::models::order::{Order, OrderLine};

/// Database row for an order header.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    created: DateTime<Utc>,
    status: String,
    total: f64,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, RepositoryError> {
        let status: OrderStatus = self.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid order status in database: {e}"))
        })?;

        Ok(Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            created: self.created,
            status,
            total: self.total,
        })
    }
}

/// Database row for an order line joined with its product name.
#[derive(sqlx::FromRow)]
struct OrderLineRow {
    product_id: i64,
    quantity: i64,
    price_each: f64,
    product_name: String,
}

impl From<OrderLineRow> for OrderLine {
    fn from(r: OrderLineRow) -> Self {
        Self {
            product_id: ProductId::new(r.product_id),
            product_name: r.product_name,
            quantity: r.quantity,
            price_each: r.price_each,
        }
    }
}

/// A cart line claimed by the checkout transaction.
#[derive(sqlx::FromRow)]
struct ClaimedLine {
    product_id: i64,
    quantity: i64,
}

/// A claimed line joined with its price/name snapshot.
struct SnapshotLine {
    product_id: i64,
    quantity: i64,
    name: String,
    price: f64,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a user's current cart into an order with line items and clear
    /// the cart, all inside one transaction.
    ///
    /// Returns `Ok(None)` if the user has no cart lines (no order is
    /// created). On any failure the transaction rolls back: no partial
    /// order is ever visible and the cart keeps its lines.
    ///
    /// The transaction's first statement is the cart-claiming DELETE, so it
    /// holds the write lock before reading anything it acts on. Two
    /// checkouts racing for the same user serialize on that lock; the loser
    /// claims zero rows and reports an empty cart.
    ///
    /// Lines whose product no longer exists are dropped from the order. A
    /// cart consisting only of such lines counts as empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn create_from_cart(
        &self,
        user_id: UserId,
    ) -> Result<Option<OrderId>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let claimed: Vec<ClaimedLine> = sqlx::query_as(
            r"
            DELETE FROM cart_items
            WHERE user_id = ?
            RETURNING product_id, quantity
            ",
        )
        .bind(user_id.as_i64())
        .fetch_all(&mut *tx)
        .await?;

        if claimed.is_empty() {
            return Ok(None);
        }

        // Snapshot name and price inside the same transaction; these are the
        // values the order freezes, regardless of later product changes.
        let mut lines = Vec::with_capacity(claimed.len());
        for line in claimed {
            let product: Option<(String, f64)> =
                sqlx::query_as("SELECT name, price FROM products WHERE id = ?")
                    .bind(line.product_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            if let Some((name, price)) = product {
                lines.push(SnapshotLine {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    name,
                    price,
                });
            }
        }

        if lines.is_empty() {
            // Only dangling lines were claimed; put them back.
            tx.rollback().await?;
            return Ok(None);
        }

        // Items are written in the order the cart listing shows them.
        lines.sort_by(|a, b| a.name.cmp(&b.name).then(a.product_id.cmp(&b.product_id)));

        #[allow(clippy::cast_precision_loss)]
        let total: f64 = lines.iter().map(|l| l.quantity as f64 * l.price).sum();

        let order_id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO orders (user_id, created, status, total)
            VALUES (?, ?, ?, ?)
            RETURNING id
            ",
        )
        .bind(user_id.as_i64())
        .bind(Utc::now())
        .bind(OrderStatus::Placed.as_str())
        .bind(total)
        .fetch_one(&mut *tx)
        .await?;

        for line in &lines {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, quantity, price_each)
                VALUES (?, ?, ?, ?)
                ",
            )
            .bind(order_id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Some(OrderId::new(order_id)))
    }

    /// Get an order header by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status is invalid.
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row: Option<OrderRow> = sqlx::query_as(
            r"
            SELECT id, user_id, created, status, total
            FROM orders
            WHERE id = ?
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(OrderRow::into_order).transpose()
    }

    /// List an order's line items with joined product names, in insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn items(&self, id: OrderId) -> Result<Vec<OrderLine>, RepositoryError> {
        let rows: Vec<OrderLineRow> = sqlx::query_as(
            r"
            SELECT oi.product_id, oi.quantity, oi.price_each,
                   p.name AS product_name
            FROM order_items oi
            JOIN products p ON oi.product_id = p.id
            WHERE oi.order_id = ?
            ORDER BY oi.id ASC
            ",
        )
        .bind(id.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderLine::from).collect())
    }

    /// List all orders for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored status is invalid.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            r"
            SELECT id, user_id, created, status, total
            FROM orders
            WHERE user_id = ?
            ORDER BY created DESC, id DESC
            ",
        )
        .bind(user_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }
}
