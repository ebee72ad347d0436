//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! bodega-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `BODEGA_DATABASE_URL` - `SQLite` connection string

use super::CommandError;

/// Run database migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or a migration
/// fails.
pub async fn run() -> Result<(), CommandError> {
    tracing::info!("Connecting to database...");
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    bodega_storefront::db::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
