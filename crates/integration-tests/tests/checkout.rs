//! Integration tests for checkout: atomicity, price freezing, empty-cart
//! rejection and the claim semantics under repeated submission.

use bodega_storefront::db::{CartRepository, CatalogRepository, OrderRepository};
use bodega_storefront::services::checkout::{CheckoutError, CheckoutService};

use bodega_integration_tests::{count_rows, seed_category, seed_product, seed_user, test_pool};

#[tokio::test]
async fn checkout_freezes_prices_and_clears_the_cart() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let p1 = seed_product(&pool, user, category, "Almonds", 10.00).await;
    let p2 = seed_product(&pool, user, category, "Bread", 5.00).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, p1, 2).await.expect("add p1");
    cart.add_item(user, p2, 1).await.expect("add p2");

    let order_id = CheckoutService::new(&pool)
        .checkout(user)
        .await
        .expect("checkout");

    // The cart is empty afterwards.
    assert!(cart.items(user).await.expect("list").is_empty());
    assert_eq!(count_rows(&pool, "cart_items").await, 0);

    let orders = OrderRepository::new(&pool);
    let order = orders
        .get(order_id)
        .await
        .expect("get order")
        .expect("order exists");
    assert_eq!(order.user_id, user);
    assert!((order.total - 25.00).abs() < f64::EPSILON);

    // Exactly one item per distinct pre-checkout cart line.
    let items = orders.items(order_id).await.expect("order items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].product_id, p1);
    assert_eq!(items[0].quantity, 2);
    assert!((items[0].price_each - 10.00).abs() < f64::EPSILON);
    assert_eq!(items[1].product_id, p2);
    assert_eq!(items[1].quantity, 1);
    assert!((items[1].price_each - 5.00).abs() < f64::EPSILON);
}

#[tokio::test]
async fn empty_cart_checkout_is_rejected_without_an_order() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;

    let result = CheckoutService::new(&pool).checkout(user).await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));

    assert_eq!(count_rows(&pool, "orders").await, 0);
    assert_eq!(count_rows(&pool, "order_items").await, 0);
}

#[tokio::test]
async fn later_price_changes_do_not_touch_committed_orders() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 10.00).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, product, 3).await.expect("add");

    let order_id = CheckoutService::new(&pool)
        .checkout(user)
        .await
        .expect("checkout");

    CatalogRepository::new(&pool)
        .set_price(product, 99.99)
        .await
        .expect("price change");

    let orders = OrderRepository::new(&pool);
    let order = orders
        .get(order_id)
        .await
        .expect("get")
        .expect("order exists");
    assert!((order.total - 30.00).abs() < f64::EPSILON);

    let items = orders.items(order_id).await.expect("items");
    assert!((items[0].price_each - 10.00).abs() < f64::EPSILON);
}

#[tokio::test]
async fn checkout_is_single_shot_but_not_deduplicated() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 10.00).await;

    let cart = CartRepository::new(&pool);
    let service = CheckoutService::new(&pool);

    cart.add_item(user, product, 1).await.expect("add");
    let first = service.checkout(user).await.expect("first checkout");

    // The cart was claimed; an immediate resubmission has nothing to buy.
    assert!(matches!(
        service.checkout(user).await,
        Err(CheckoutError::EmptyCart)
    ));

    // Refilling the cart legitimately produces a second, distinct order.
    cart.add_item(user, product, 1).await.expect("re-add");
    let second = service.checkout(user).await.expect("second checkout");
    assert_ne!(first, second);
    assert_eq!(count_rows(&pool, "orders").await, 2);
}

#[tokio::test]
async fn lines_for_deleted_products_are_dropped_from_the_order() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let kept = seed_product(&pool, user, category, "Rice", 10.00).await;
    let doomed = seed_product(&pool, user, category, "Dal", 3.49).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, kept, 1).await.expect("add kept");
    cart.add_item(user, doomed, 2).await.expect("add doomed");

    CatalogRepository::new(&pool)
        .delete(doomed)
        .await
        .expect("delete product");

    let order_id = CheckoutService::new(&pool)
        .checkout(user)
        .await
        .expect("checkout");

    let orders = OrderRepository::new(&pool);
    let order = orders
        .get(order_id)
        .await
        .expect("get")
        .expect("order exists");
    assert!((order.total - 10.00).abs() < f64::EPSILON);

    let items = orders.items(order_id).await.expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_id, kept);
}

#[tokio::test]
async fn cart_of_only_dangling_lines_counts_as_empty_and_is_kept() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let doomed = seed_product(&pool, user, category, "Dal", 3.49).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, doomed, 2).await.expect("add");

    CatalogRepository::new(&pool)
        .delete(doomed)
        .await
        .expect("delete product");

    let result = CheckoutService::new(&pool).checkout(user).await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));

    // The transaction rolled back: no order, and the raw line is still there.
    assert_eq!(count_rows(&pool, "orders").await, 0);
    assert_eq!(count_rows(&pool, "cart_items").await, 1);
}

#[tokio::test]
async fn order_items_follow_the_cart_listing_order() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    // Add in reverse alphabetical order; items are written name-ascending,
    // matching the cart listing the user saw.
    let zucchini = seed_product(&pool, user, category, "Zucchini", 2.00).await;
    let apples = seed_product(&pool, user, category, "Apples", 1.00).await;

    let cart = CartRepository::new(&pool);
    cart.add_item(user, zucchini, 1).await.expect("add");
    cart.add_item(user, apples, 1).await.expect("add");

    let order_id = CheckoutService::new(&pool)
        .checkout(user)
        .await
        .expect("checkout");

    let items = OrderRepository::new(&pool)
        .items(order_id)
        .await
        .expect("items");
    assert_eq!(items[0].product_id, apples);
    assert_eq!(items[1].product_id, zucchini);
}
