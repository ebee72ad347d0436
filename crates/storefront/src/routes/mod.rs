//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Recent products, or search via ?q=
//! GET  /health                   - Health check (in main)
//!
//! # Auth
//! POST /auth/register            - Register
//! POST /auth/login               - Login
//! POST /auth/logout              - Logout
//!
//! # Catalog
//! GET  /categories               - Category listing
//! GET  /products                 - Product listing (?category=)
//! GET  /products/{id}            - Product detail
//! POST /products                 - Create product (login required)
//! POST /products/{id}            - Update product (owner only)
//! POST /products/{id}/delete     - Delete product (owner only)
//!
//! # Cart (login required)
//! GET  /cart                     - Cart contents with display total
//! POST /cart/add/{product_id}    - Add to cart (merge-add)
//! POST /cart/update/{product_id} - Set quantity (zero or below removes)
//! POST /cart/clear               - Remove all lines
//!
//! # Orders (login required)
//! POST /checkout                 - Convert cart into an order
//! GET  /orders                   - Order history, newest first
//! GET  /orders/{id}              - Order receipt (owner only)
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", get(products::show).post(products::update))
        .route("/{id}/delete", post(products::delete))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add/{product_id}", post(cart::add))
        .route("/update/{product_id}", post(cart::update))
        .route("/clear", post(cart::clear))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
}

/// Create the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/categories", get(products::categories))
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(orders::checkout))
        .nest("/orders", order_routes())
}
