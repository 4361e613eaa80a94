//! Admin panel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ADMIN_DATABASE_URL` - SQLite connection string (default: `sqlite://person-admin.db`)
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3000)
//! - `ADMIN_BASE_URL` - Public URL (default: `http://localhost:3000`);
//!   an `https://` base URL marks session cookies as Secure
//! - `ADMIN_BOOTSTRAP_EMAIL` / `ADMIN_BOOTSTRAP_PASSWORD` - seed admin
//!   account, created at startup when the admin table is empty (both
//!   variables must be set together)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin panel application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// SQLite database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Seed admin account, applied only when the admin table is empty
    pub bootstrap: Option<BootstrapAdmin>,
}

/// Seed admin account credentials from the environment.
#[derive(Clone)]
pub struct BootstrapAdmin {
    /// Login email for the seeded admin
    pub email: String,
    /// Plaintext password; digested before it is ever persisted
    pub password: SecretString,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse, or if only one
    /// half of the bootstrap credential pair is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = SecretString::from(get_env_or_default(
            "ADMIN_DATABASE_URL",
            "sqlite://person-admin.db",
        ));
        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("ADMIN_BASE_URL", "http://localhost:3000");
        let bootstrap = BootstrapAdmin::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            bootstrap,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BootstrapAdmin {
    /// Load the optional bootstrap credential pair.
    ///
    /// Setting only one of the two variables is treated as a configuration
    /// error rather than silently skipping the seed step.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let email = get_optional_env("ADMIN_BOOTSTRAP_EMAIL");
        let password = get_optional_env("ADMIN_BOOTSTRAP_PASSWORD");

        match (email, password) {
            (Some(email), Some(password)) => Ok(Some(Self {
                email,
                password: SecretString::from(password),
            })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::MissingEnvVar(
                "ADMIN_BOOTSTRAP_PASSWORD".to_string(),
            )),
            (None, Some(_)) => Err(ConfigError::MissingEnvVar(
                "ADMIN_BOOTSTRAP_EMAIL".to_string(),
            )),
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_debug_redacts_password() {
        let bootstrap = BootstrapAdmin {
            email: "admin@admin.com".to_string(),
            password: SecretString::from("123456"),
        };
        let rendered = format!("{bootstrap:?}");
        assert!(rendered.contains("admin@admin.com"));
        assert!(!rendered.contains("123456"));
    }
}
