//! Admin flag management command.

use bodega_core::Username;
use bodega_storefront::db::UserRepository;

use super::CommandError;

/// Set or clear a user's admin flag.
///
/// # Errors
///
/// Returns `CommandError::UnknownUser` if the username does not exist, or
/// a database error.
pub async fn set_admin(username: &str, is_admin: bool) -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let users = UserRepository::new(&pool);
    let username = Username::parse(username)?;

    let user = users
        .get_by_username(&username)
        .await?
        .ok_or_else(|| CommandError::UnknownUser(username.to_string()))?;

    users.set_admin(user.id, is_admin).await?;

    tracing::info!(user_id = %user.id, is_admin, "admin flag updated");
    Ok(())
}
