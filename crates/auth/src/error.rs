//! Authentication error taxonomy.

use thiserror::Error;

/// Why a presented token was rejected.
///
/// The sub-kind exists for server-side diagnostics only; clients always see
/// the same uniform rejection surface. Validation failures are ordinary
/// values, never faults.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The token could not be parsed at all.
    #[error("token is malformed")]
    Malformed,

    /// The signature does not verify against the configured secret.
    #[error("token signature does not verify")]
    BadSignature,

    /// The expiration instant has passed.
    #[error("token has expired")]
    Expired,

    /// Issuer or audience does not match the configured expected values.
    #[error("token issuer or audience mismatch")]
    IssuerOrAudienceMismatch,
}

/// Missing or blank startup configuration.
///
/// Fatal: this aborts startup and is never caught per-request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    Missing(&'static str),
}

/// Token signing failed at issue time.
#[derive(Debug, Error)]
#[error("failed to sign token: {0}")]
pub struct SigningError(#[from] jsonwebtoken::errors::Error);
