//! Startup configuration for the authentication subsystem.

use crate::error::ConfigError;

/// Immutable authentication configuration.
///
/// Loaded once at process start; read by any number of concurrent requests
/// without locking afterwards.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret (HMAC-SHA256).
    pub secret: String,

    /// Expected `iss` claim.
    pub issuer: String,

    /// Expected `aud` claim.
    pub audience: String,

    /// Expected login username.
    pub login_username: String,

    /// Expected login password.
    pub login_password: String,
}

impl AuthConfig {
    /// Load configuration from the environment.
    ///
    /// Absence of any value is a fatal startup condition, not a per-request
    /// error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: require("JWT_SECRET")?,
            issuer: require("JWT_ISSUER")?,
            audience: require("JWT_AUDIENCE")?,
            login_username: require("LOGIN_USERNAME")?,
            login_password: require("LOGIN_PASSWORD")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
