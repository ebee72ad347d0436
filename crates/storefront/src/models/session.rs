//! Session types and keys.

use serde::{Deserialize, Serialize};

use bodega_core::UserId;

/// Session keys used by the storefront.
pub mod session_keys {
    /// The logged-in user, set at login and cleared at logout.
    pub const CURRENT_USER: &str = "current_user";
}

/// The logged-in user as stored in the session.
///
/// This is the "current user id" input every authenticated route receives;
/// authentication itself happened at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user ID.
    pub id: UserId,
    /// Login username, for display.
    pub username: String,
}
