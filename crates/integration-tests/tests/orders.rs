//! Integration tests for the order read side: headers, items, per-user
//! listing and ownership isolation.

use bodega_core::{OrderId, OrderStatus};
use bodega_storefront::db::{CartRepository, OrderRepository};
use bodega_storefront::services::checkout::CheckoutService;

use bodega_integration_tests::{seed_category, seed_product, seed_user, test_pool};

#[tokio::test]
async fn get_returns_the_header_with_placed_status() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 14.99).await;

    CartRepository::new(&pool)
        .add_item(user, product, 1)
        .await
        .expect("add");
    let order_id = CheckoutService::new(&pool)
        .checkout(user)
        .await
        .expect("checkout");

    let order = OrderRepository::new(&pool)
        .get(order_id)
        .await
        .expect("get")
        .expect("order exists");

    assert_eq!(order.id, order_id);
    assert_eq!(order.user_id, user);
    assert_eq!(order.status, OrderStatus::Placed);
}

#[tokio::test]
async fn get_returns_none_for_unknown_order() {
    let pool = test_pool().await;

    let order = OrderRepository::new(&pool)
        .get(OrderId::new(404))
        .await
        .expect("get");
    assert!(order.is_none());
}

#[tokio::test]
async fn items_join_the_product_name() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Basmati Rice 5kg", 14.99).await;

    CartRepository::new(&pool)
        .add_item(user, product, 2)
        .await
        .expect("add");
    let order_id = CheckoutService::new(&pool)
        .checkout(user)
        .await
        .expect("checkout");

    let items = OrderRepository::new(&pool)
        .items(order_id)
        .await
        .expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_name, "Basmati Rice 5kg");
}

#[tokio::test]
async fn list_for_user_is_newest_first() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "buyer").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, user, category, "Rice", 14.99).await;

    let cart = CartRepository::new(&pool);
    let service = CheckoutService::new(&pool);

    cart.add_item(user, product, 1).await.expect("add");
    let first = service.checkout(user).await.expect("first checkout");
    cart.add_item(user, product, 2).await.expect("add again");
    let second = service.checkout(user).await.expect("second checkout");

    let orders = OrderRepository::new(&pool)
        .list_for_user(user)
        .await
        .expect("list");

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, second);
    assert_eq!(orders[1].id, first);
}

#[tokio::test]
async fn list_for_user_never_shows_foreign_orders() {
    let pool = test_pool().await;
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let category = seed_category(&pool, "Groceries").await;
    let product = seed_product(&pool, alice, category, "Rice", 14.99).await;

    let cart = CartRepository::new(&pool);
    let service = CheckoutService::new(&pool);

    cart.add_item(alice, product, 1).await.expect("add alice");
    cart.add_item(bob, product, 1).await.expect("add bob");
    service.checkout(alice).await.expect("checkout alice");
    let bob_order = service.checkout(bob).await.expect("checkout bob");

    let orders = OrderRepository::new(&pool)
        .list_for_user(alice)
        .await
        .expect("list");

    assert_eq!(orders.len(), 1);
    assert!(orders.iter().all(|order| order.user_id == alice));
    assert!(orders.iter().all(|order| order.id != bob_order));
}
