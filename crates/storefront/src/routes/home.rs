//! Home route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::middleware::OptionalUser;
use crate::models::CurrentUser;
use crate::models::product::Product;
use crate::state::AppState;

/// Number of products shown on the home page.
const HOME_PAGE_LIMIT: i64 = 12;

/// Query parameters for the home page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Search keyword; when present the response is a search result.
    pub q: Option<String>,
}

/// Home page data: site identity, login state and the product strip.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub site_name: String,
    pub user: Option<CurrentUser>,
    pub products: Vec<Product>,
}

/// Display recent products, or search results when `?q=` is given.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    Query(query): Query<HomeQuery>,
) -> Result<Json<HomeView>> {
    let catalog = CatalogRepository::new(state.pool());

    let keyword = query.q.as_deref().map(str::trim).unwrap_or_default();
    let products = if keyword.is_empty() {
        catalog.products(None, Some(HOME_PAGE_LIMIT)).await?
    } else {
        catalog.search(keyword, HOME_PAGE_LIMIT).await?
    };

    Ok(Json(HomeView {
        site_name: state.config().site_name.clone(),
        user,
        products,
    }))
}
