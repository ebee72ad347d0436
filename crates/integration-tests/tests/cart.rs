//! Integration tests for the cart ledger.
//!
//! Covers merge-add accumulation, zero-collapse, the silent no-op on
//! updating an absent line, and the listing join.

use bodega_core::ProductId;
use bodega_storefront::db::CartRepository;
use bodega_storefront::models::cart::cart_total;

use bodega_integration_tests::{count_rows, seed_category, seed_product, seed_user, test_pool};

#[tokio::test]
async fn repeated_adds_accumulate_quantity() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 14.99).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, product, 2).await.expect("first add");
    cart.add_item(user, product, 3).await.expect("second add");

    let items = cart.items(user).await.expect("list items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 5);
}

#[tokio::test]
async fn add_creates_one_line_per_product() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    // Insert in reverse alphabetical order; the listing sorts by name.
    let beans = seed_product(&pool, user, category, "Beans", 2.50).await;
    let apples = seed_product(&pool, user, category, "Apples", 1.25).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, beans, 1).await.expect("add beans");
    cart.add_item(user, apples, 4).await.expect("add apples");

    let items = cart.items(user).await.expect("list items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Apples");
    assert_eq!(items[1].name, "Beans");
    assert_eq!(items[0].quantity, 4);
}

#[tokio::test]
async fn set_quantity_overwrites_instead_of_merging() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 14.99).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, product, 5).await.expect("add");
    cart.set_quantity(user, product, 2).await.expect("set");

    let items = cart.items(user).await.expect("list items");
    assert_eq!(items[0].quantity, 2);
}

#[tokio::test]
async fn zero_or_negative_quantity_removes_the_line() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 14.99).await;

    let cart = CartRepository::new(&pool);

    cart.add_item(user, product, 2).await.expect("add");
    cart.set_quantity(user, product, 0).await.expect("set zero");
    assert!(cart.items(user).await.expect("list").is_empty());

    cart.add_item(user, product, 2).await.expect("re-add");
    cart.set_quantity(user, product, -3).await.expect("set negative");
    assert!(cart.items(user).await.expect("list").is_empty());

    // Removing an already-absent line is idempotent.
    cart.set_quantity(user, product, 0).await.expect("set zero again");
    assert_eq!(count_rows(&pool, "cart_items").await, 0);
}

#[tokio::test]
async fn set_quantity_on_absent_line_is_a_noop() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 14.99).await;

    let cart = CartRepository::new(&pool);
    cart.set_quantity(user, product, 3).await.expect("set");

    // No line is created.
    assert!(cart.items(user).await.expect("list").is_empty());
    assert_eq!(count_rows(&pool, "cart_items").await, 0);
}

#[tokio::test]
async fn clear_removes_every_line_for_the_user_only() {
    let pool = test_pool().await;
    let buyer = seed_user(&pool, "buyer").await;
    let other = seed_user(&pool, "other").await;
    let category = seed_category(&pool, "Groceries").await;
    let rice = seed_product(&pool, buyer, category, "Rice", 14.99).await;
    let dal = seed_product(&pool, buyer, category, "Dal", 3.49).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(buyer, rice, 1).await.expect("add");
    cart.add_item(buyer, dal, 2).await.expect("add");
    cart.add_item(other, rice, 1).await.expect("add other");

    cart.clear(buyer).await.expect("clear");

    assert!(cart.items(buyer).await.expect("list").is_empty());
    assert_eq!(cart.items(other).await.expect("list other").len(), 1);
}

#[tokio::test]
async fn listing_uses_current_product_price() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 10.00).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, product, 2).await.expect("add");

    bodega_storefront::db::CatalogRepository::new(&pool)
        .set_price(product, 12.00)
        .await
        .expect("price change");

    let items = cart.items(user).await.expect("list");
    assert!((items[0].price - 12.00).abs() < f64::EPSILON);
    assert!((cart_total(&items) - 24.00).abs() < f64::EPSILON);
}

#[tokio::test]
async fn adding_an_unknown_product_is_not_validated() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, ProductId::new(9999), 1)
        .await
        .expect("add succeeds without catalog validation");

    // The line exists but the listing hides it via the product join.
    assert_eq!(count_rows(&pool, "cart_items").await, 1);
    assert!(cart.items(user).await.expect("list").is_empty());
}
