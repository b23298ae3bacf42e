//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MENUBOARD_ADMIN_USERNAME` - Shared admin username
//! - `MENUBOARD_ADMIN_PASSWORD` - Shared admin password
//!
//! ## Optional
//! - `MENUBOARD_HOST` - Bind address (default: 127.0.0.1)
//! - `MENUBOARD_PORT` - Listen port (default: 3000)
//! - `MENUBOARD_MENU_PATH` - Catalog document path (default: data/menu.json)
//! - `MENUBOARD_AVAILABILITY_PATH` - Availability document path
//!   (default: data/available.json)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
///
/// `Debug` is safe to log: the admin password is a `SecretString` and prints
/// redacted.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the read-only menu catalog document
    pub menu_path: PathBuf,
    /// Path to the mutable availability document
    pub availability_path: PathBuf,
    /// Shared admin username
    pub admin_username: String,
    /// Shared admin password
    pub admin_password: SecretString,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional("MENUBOARD_HOST")
            .map_or(Ok(IpAddr::from([127, 0, 0, 1])), |v| {
                v.parse()
                    .map_err(|e| ConfigError::InvalidEnvVar("MENUBOARD_HOST".into(), format!("{e}")))
            })?;

        let port = optional("MENUBOARD_PORT").map_or(Ok(3000), |v| {
            v.parse()
                .map_err(|e| ConfigError::InvalidEnvVar("MENUBOARD_PORT".into(), format!("{e}")))
        })?;

        let menu_path =
            optional("MENUBOARD_MENU_PATH").map_or_else(|| PathBuf::from("data/menu.json"), Into::into);
        let availability_path = optional("MENUBOARD_AVAILABILITY_PATH")
            .map_or_else(|| PathBuf::from("data/available.json"), Into::into);

        Ok(Self {
            host,
            port,
            menu_path,
            availability_path,
            admin_username: require("MENUBOARD_ADMIN_USERNAME")?,
            admin_password: require("MENUBOARD_ADMIN_PASSWORD")?.into(),
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Check a submitted credential pair against the configured admin pair.
    ///
    /// This is the single-role capability check: there is exactly one admin
    /// identity and no user/role graph behind it.
    #[must_use]
    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        username == self.admin_username && password == self.admin_password.expose_secret()
    }
}

fn require(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
