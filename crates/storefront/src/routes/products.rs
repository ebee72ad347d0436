//! Product route handlers.
//!
//! Products are globally readable; mutation is owner-only. Form field
//! validation (name, price) happens here, before the repository is invoked.

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bodega_core::{CategoryId, ProductId};

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::product::{Category, NewProduct, Product};
use crate::state::AppState;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one category.
    pub category: Option<i64>,
}

/// Product listing response: the catalog plus the category filter choices.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Product form data for create and update.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub stock: Option<i64>,
    pub category: Option<i64>,
}

/// Id of a newly created product.
#[derive(Debug, Serialize)]
pub struct CreatedProduct {
    pub id: ProductId,
}

impl ProductForm {
    /// Validate the form into repository input.
    fn into_new_product(self) -> Result<NewProduct> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::BadRequest("Product name is required!".to_owned()));
        }

        let Some(price) = self.price else {
            return Err(AppError::BadRequest("Price is required!".to_owned()));
        };
        if price < 0.0 || !price.is_finite() {
            return Err(AppError::BadRequest("Price must not be negative!".to_owned()));
        }

        let Some(category) = self.category else {
            return Err(AppError::BadRequest("Category is required!".to_owned()));
        };

        let stock = self.stock.unwrap_or(0).max(0);

        Ok(NewProduct {
            category_id: CategoryId::new(category),
            name,
            description: self.description.unwrap_or_default().trim().to_owned(),
            price,
            image_url: self.image_url.unwrap_or_default().trim().to_owned(),
            stock,
        })
    }
}

/// List all categories.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let catalog = CatalogRepository::new(state.pool());
    Ok(Json(catalog.categories().await?))
}

/// Display the product listing, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ProductListing>> {
    let catalog = CatalogRepository::new(state.pool());

    let categories = catalog.categories().await?;
    let products = catalog
        .products(query.category.map(CategoryId::new), None)
        .await?;

    Ok(Json(ProductListing {
        categories,
        products,
    }))
}

/// Display a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let catalog = CatalogRepository::new(state.pool());

    let product = catalog
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found!".to_owned()))?;

    Ok(Json(product))
}

/// Create a product owned by the logged-in user.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Form(form): Form<ProductForm>,
) -> Result<impl IntoResponse> {
    let new_product = form.into_new_product()?;

    let catalog = CatalogRepository::new(state.pool());
    let id = catalog.create(user.id, &new_product).await?;

    tracing::info!(product_id = %id, user_id = %user.id, "product created");

    Ok((StatusCode::CREATED, Json(CreatedProduct { id })))
}

/// Update a product. Only the owner may update.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Result<StatusCode> {
    let catalog = CatalogRepository::new(state.pool());
    let id = ProductId::new(id);

    let product = catalog
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found!".to_owned()))?;

    if product.owner != user.id {
        return Err(AppError::Forbidden(
            "You do not have permission to edit this product.".to_owned(),
        ));
    }

    let new_product = form.into_new_product()?;
    catalog.update(id, &new_product).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product. Only the owner may delete.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let catalog = CatalogRepository::new(state.pool());
    let id = ProductId::new(id);

    let product = catalog
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found!".to_owned()))?;

    if product.owner != user.id {
        return Err(AppError::Forbidden(
            "You do not have permission to delete this product.".to_owned(),
        ));
    }

    catalog.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
