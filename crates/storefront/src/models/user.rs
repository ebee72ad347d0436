//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bodega_core::{UserId, Username};

/// A registered user (domain type).
///
/// The password hash never leaves the repository layer.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login username.
    pub username: Username,
    /// Whether this user has the admin flag.
    pub is_admin: bool,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}
