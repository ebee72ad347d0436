//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::SqlitePool;
use thiserror::Error;

/// Errors shared by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] bodega_storefront::db::RepositoryError),

    #[error("Auth error: {0}")]
    Auth(#[from] bodega_storefront::services::auth::AuthError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] bodega_core::UsernameError),

    #[error("No such user: {0}")]
    UnknownUser(String),
}

/// Connect to the database named by `BODEGA_DATABASE_URL`.
pub async fn connect() -> Result<SqlitePool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("BODEGA_DATABASE_URL")
        .map_err(|_| CommandError::MissingEnvVar("BODEGA_DATABASE_URL"))?;

    let pool = bodega_storefront::db::create_pool(&SecretString::from(database_url)).await?;
    Ok(pool)
}
