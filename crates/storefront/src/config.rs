//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BODEGA_DATABASE_URL` - `SQLite` connection string (e.g., `sqlite:bodega.db`)
//! - `BODEGA_SESSION_SECRET` - Session secret (min 32 chars, no placeholders)
//!
//! ## Optional
//! - `BODEGA_HOST` - Bind address (default: 127.0.0.1)
//! - `BODEGA_PORT` - Listen port (default: 3000)
//! - `BODEGA_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `BODEGA_SITE_NAME` - Site display name (default: Bodega)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Session secret
    pub session_secret: SecretString,
    /// Site display name
    pub site_name: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the session secret fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = require_env("BODEGA_DATABASE_URL")?;

        let host: IpAddr = optional_env("BODEGA_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_owned())
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar("BODEGA_HOST".to_owned(), format!("{e}")))?;

        let port: u16 = optional_env("BODEGA_PORT")
            .unwrap_or_else(|| "3000".to_owned())
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar("BODEGA_PORT".to_owned(), format!("{e}")))?;

        let base_url =
            optional_env("BODEGA_BASE_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());

        let session_secret = require_env("BODEGA_SESSION_SECRET")?;
        validate_secret("BODEGA_SESSION_SECRET", &session_secret)?;

        let site_name = optional_env("BODEGA_SITE_NAME").unwrap_or_else(|| "Bodega".to_owned());

        let sentry_dsn = optional_env("SENTRY_DSN");

        Ok(Self {
            database_url: SecretString::from(database_url),
            host,
            port,
            base_url,
            session_secret: SecretString::from(session_secret),
            site_name,
            sentry_dsn,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Expose the database URL for pool creation.
    #[must_use]
    pub const fn database_url(&self) -> &SecretString {
        &self.database_url
    }

    /// Whether the public base URL is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Validate a secret: long enough and not an obvious placeholder.
fn validate_secret(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            name.to_owned(),
            format!("must be at least {MIN_SESSION_SECRET_LENGTH} characters"),
        ));
    }

    let lowered = value.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lowered.contains(**p)) {
        return Err(ConfigError::InsecureSecret(
            name.to_owned(),
            format!("contains placeholder pattern \"{pattern}\""),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secret_is_rejected() {
        assert!(matches!(
            validate_secret("TEST", "short"),
            Err(ConfigError::InsecureSecret(_, _))
        ));
    }

    #[test]
    fn placeholder_secret_is_rejected() {
        let value = "changeme-changeme-changeme-changeme";
        assert!(matches!(
            validate_secret("TEST", value),
            Err(ConfigError::InsecureSecret(_, _))
        ));
    }

    #[test]
    fn strong_secret_is_accepted() {
        let value = "kJ8vN2qR5tW9xZ3cF6hM1pL4sD7gB0yA";
        assert!(validate_secret("TEST", value).is_ok());
    }
}
