//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UsernameError {
    /// The input string is empty (after trimming).
    #[error("username cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("username cannot contain whitespace")]
    ContainsWhitespace,
}

/// A login username.
///
/// ## Constraints
///
/// - Length: 1-64 characters after trimming surrounding whitespace
/// - No interior whitespace
///
/// ## Examples
///
/// ```
/// use bodega_core::Username;
///
/// assert!(Username::parse("user1").is_ok());
/// assert!(Username::parse("  admin  ").is_ok()); // trimmed
///
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("two words").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

/// Maximum username length.
const MAX_LENGTH: usize = 64;

impl Username {
    /// Parse a username from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`UsernameError`] if the trimmed input is empty, too long,
    /// or contains interior whitespace.
    pub fn parse(input: &str) -> Result<Self, UsernameError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }
        if trimmed.chars().count() > MAX_LENGTH {
            return Err(UsernameError::TooLong { max: MAX_LENGTH });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(UsernameError::ContainsWhitespace);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
