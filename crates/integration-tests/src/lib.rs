//! Test helpers for Bodega integration tests.
//!
//! Tests run against hermetic in-memory `SQLite` databases with the real
//! schema migrations applied. The pool is capped at one connection so every
//! query sees the same in-memory database.

#![cfg_attr(not(test), forbid(unsafe_code))]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use bodega_core::{CategoryId, ProductId, UserId, Username};
use bodega_storefront::db::{CatalogRepository, UserRepository};
use bodega_storefront::models::product::NewProduct;

/// Create a migrated in-memory database pool.
///
/// # Panics
///
/// Panics if the pool cannot be created or migrations fail; tests cannot
/// proceed without a database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory pool");

    bodega_storefront::db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Insert a user and return its id.
///
/// The stored password hash is a placeholder; tests that exercise login go
/// through `AuthService::register` instead.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn seed_user(pool: &SqlitePool, username: &str) -> UserId {
    let users = UserRepository::new(pool);
    let username = Username::parse(username).expect("valid username");
    let user = users
        .create(&username, "unusable-test-hash")
        .await
        .expect("Failed to seed user");
    user.id
}

/// Insert a category and return its id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn seed_category(pool: &SqlitePool, name: &str) -> CategoryId {
    CatalogRepository::new(pool)
        .create_category(name)
        .await
        .expect("Failed to seed category")
}

/// Insert a product and return its id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn seed_product(
    pool: &SqlitePool,
    owner: UserId,
    category: CategoryId,
    name: &str,
    price: f64,
) -> ProductId {
    CatalogRepository::new(pool)
        .create(
            owner,
            &NewProduct {
                category_id: category,
                name: name.to_owned(),
                description: format!("{name} description"),
                price,
                image_url: String::new(),
                stock: 10,
            },
        )
        .await
        .expect("Failed to seed product")
}

/// Count rows in a table.
///
/// # Panics
///
/// Panics if the query fails.
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
