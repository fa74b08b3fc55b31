//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; a missing database URL or an
//! unusable signing key aborts the process before any request is served.

use std::env;

/// Minimum length of the JWT signing key in bytes (HS256).
const MIN_SIGNING_KEY_BYTES: usize = 32;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string for the hosted database
    pub database_url: String,
    /// JWT signing key for session tokens (raw bytes, >= 32)
    pub jwt_signing_key: Vec<u8>,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let jwt_signing_key = env::var("JWT_SIGNING_KEY")
            .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
            .into_bytes();
        if jwt_signing_key.len() < MIN_SIGNING_KEY_BYTES {
            return Err(ConfigError::WeakSigningKey {
                minimum: MIN_SIGNING_KEY_BYTES,
                actual: jwt_signing_key.len(),
            });
        }

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            jwt_signing_key,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            database_url: "postgres://localhost:5432/runlog_test".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!!".to_vec(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("JWT signing key too short: need at least {minimum} bytes, got {actual}")]
    WeakSigningKey { minimum: usize, actual: usize },
}
