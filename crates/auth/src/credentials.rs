//! Credential verification capability.

use crate::config::AuthConfig;

/// Verifies login credentials.
///
/// The fixed-pair implementation below is a stand-in for a real credential
/// store; the trait keeps the login flow testable independent of storage.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Compares against a single configured username/password pair.
#[derive(Debug, Clone)]
pub struct FixedCredentialVerifier {
    username: String,
    password: String,
}

impl FixedCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(cfg: &AuthConfig) -> Self {
        Self::new(cfg.login_username.clone(), cfg.login_password.clone())
    }
}

impl CredentialVerifier for FixedCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
