//! Catalog repository: categories and user-owned products.
//!
//! Read queries join the category name the way listing pages display it.
//! Ownership of product mutation is enforced by the caller; this repository
//! performs no authorization.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use bodega_core::{CategoryId, ProductId, UserId};

use super::RepositoryError;
use crate::models::product::{Category, NewProduct, Product};

/// Columns selected for every product read, with the joined category name.
const PRODUCT_COLUMNS: &str = r"
    p.id, p.user_id, p.category_id, p.name, p.description,
    p.price, p.image_url, p.stock, p.created,
    c.name AS category_name
";

/// Database row for a product joined with its category name.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    user_id: i64,
    category_id: i64,
    name: String,
    description: String,
    price: f64,
    image_url: String,
    stock: i64,
    created: DateTime<Utc>,
    category_name: String,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Self {
            id: ProductId::new(r.id),
            owner: UserId::new(r.user_id),
            category_id: CategoryId::new(r.category_id),
            category_name: r.category_name,
            name: r.name,
            description: r.description,
            price: r.price,
            image_url: r.image_url,
            stock: r.stock,
            created: r.created,
        }
    }
}

/// Repository for catalog database operations.
pub struct CatalogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories, name ascending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM categories ORDER BY name ASC")
                .fetch_all(self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Category {
                id: CategoryId::new(id),
                name,
            })
            .collect())
    }

    /// Create a new category and return its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_category(&self, name: &str) -> Result<CategoryId, RepositoryError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO categories (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(self.pool)
            .await?;

        Ok(CategoryId::new(id))
    }

    /// List products, newest first, optionally filtered to one category and
    /// capped to a limit.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn products(
        &self,
        category: Option<CategoryId>,
        limit: Option<i64>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p JOIN categories c ON p.category_id = c.id"
        );
        if category.is_some() {
            sql.push_str(" WHERE p.category_id = ?");
        }
        sql.push_str(" ORDER BY p.created DESC, p.id DESC");
        if limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut query = sqlx::query_as::<_, ProductRow>(&sql);
        if let Some(category) = category {
            query = query.bind(category.as_i64());
        }
        if let Some(limit) = limit {
            query = query.bind(limit);
        }

        let rows = query.fetch_all(self.pool).await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Search products by a keyword in the name, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(&self, keyword: &str, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p JOIN categories c ON p.category_id = c.id \
             WHERE p.name LIKE ? ORDER BY p.created DESC, p.id DESC LIMIT ?"
        );

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(format!("%{keyword}%"))
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product by its ID, with the joined category name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products p JOIN categories c ON p.category_id = c.id \
             WHERE p.id = ?"
        );

        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id.as_i64())
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    /// Create a product owned by `owner` and return its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        owner: UserId,
        product: &NewProduct,
    ) -> Result<ProductId, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO products (user_id, category_id, name, description, price, image_url, stock, created)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            ",
        )
        .bind(owner.as_i64())
        .bind(product.category_id.as_i64())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.stock)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(ProductId::new(id))
    }

    /// Update a product's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: ProductId, product: &NewProduct) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET category_id = ?, name = ?, description = ?, price = ?, image_url = ?, stock = ?
            WHERE id = ?
            ",
        )
        .bind(product.category_id.as_i64())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image_url)
        .bind(product.stock)
        .bind(id.as_i64())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Update only a product's price.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_price(&self, id: ProductId, price: f64) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET price = ? WHERE id = ?")
            .bind(price)
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
