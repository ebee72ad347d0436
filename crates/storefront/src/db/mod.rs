//! Database operations for the Bodega `SQLite` store.
//!
//! ## Tables
//!
//! - `users` - Site authentication and the admin flag
//! - `categories` / `products` - The catalog (products are user-owned)
//! - `cart_items` - Per-user cart ledger, UNIQUE(user_id, product_id)
//! - `orders` / `order_items` - Committed checkouts, immutable once written
//! - `tower_sessions` - Session storage (created by the session store)
//!
//! Repositories own all SQL. Multi-statement writes run inside a single
//! transaction; the checkout transaction in [`orders`] is the only place
//! that touches more than one table.
//!
//! Foreign key enforcement stays at SQLite's default (off): adding a cart
//! line does not validate that the product exists, and deleting a product
//! leaves cart lines that reads hide via their JOIN.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/`, embedded in
//! [`MIGRATOR`], and run via:
//! ```bash
//! cargo run -p bodega-cli -- migrate
//! ```

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use cart::CartRepository;
pub use catalog::CatalogRepository;
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Embedded schema migrations from `crates/storefront/migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// WAL mode lets readers proceed while a writer holds the lock; the busy
/// timeout queues writers instead of failing them.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
