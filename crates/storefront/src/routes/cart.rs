//! Cart route handlers.
//!
//! All cart routes require a logged-in user. Quantity normalization (the
//! "default to 1" convention for adds) happens here; the repository expects
//! positive quantities for adds and treats zero-or-below as removal for
//! updates.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bodega_core::ProductId;

use crate::db::CartRepository;
use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::cart::{CartLine, cart_total};
use crate::state::AppState;

/// Cart contents with the display total at current prices.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total: f64,
}

/// Quantity form data for add and update.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub qty: Option<i64>,
}

async fn cart_view(state: &AppState, user_id: bodega_core::UserId) -> Result<Json<CartView>> {
    let cart = CartRepository::new(state.pool());
    let items = cart.items(user_id).await?;
    let total = cart_total(&items);
    Ok(Json(CartView { items, total }))
}

/// Display the cart.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<CartView>> {
    cart_view(&state, user.id).await
}

/// Add a product to the cart (merge-add).
///
/// A missing or non-positive quantity is treated as 1.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<i64>,
    Form(form): Form<QuantityForm>,
) -> Result<Json<CartView>> {
    let qty = form.qty.filter(|q| *q > 0).unwrap_or(1);

    let cart = CartRepository::new(state.pool());
    cart.add_item(user.id, ProductId::new(product_id), qty).await?;

    cart_view(&state, user.id).await
}

/// Set a cart line's quantity.
///
/// A missing quantity counts as zero, and zero or below removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<i64>,
    Form(form): Form<QuantityForm>,
) -> Result<Json<CartView>> {
    let qty = form.qty.unwrap_or(0);

    let cart = CartRepository::new(state.pool());
    cart.set_quantity(user.id, ProductId::new(product_id), qty).await?;

    cart_view(&state, user.id).await
}

/// Remove all lines from the cart.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<StatusCode> {
    let cart = CartRepository::new(state.pool());
    cart.clear(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
