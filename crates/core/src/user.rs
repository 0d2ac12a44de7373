//! The user entity and its field-validation rules.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::UserId;

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Build a user after validating both fields.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        validate_name(&name)?;
        validate_email(&email)?;
        Ok(Self { id, name, email })
    }
}

/// Validate a display name.
///
/// Names may contain ASCII letters, whitespace, hyphens, and apostrophes.
pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'';
    if !name.chars().all(allowed) {
        return Err(DomainError::validation("name contains invalid characters"));
    }
    Ok(())
}

/// Validate an email address (structural check only).
pub fn validate_email(email: &str) -> DomainResult<()> {
    if email.trim().is_empty() {
        return Err(DomainError::validation("email is required"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(DomainError::validation("email must not contain whitespace"));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::validation("email must contain '@'"));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(DomainError::validation("email is not a valid address"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(DomainError::validation("email domain is not valid"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("Mary-Jane O'Brien").is_ok());
    }

    #[test]
    fn rejects_blank_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn rejects_names_with_digits_or_symbols() {
        assert!(validate_name("Alice1").is_err());
        assert!(validate_name("Bob_").is_err());
        assert!(validate_name("Eve!").is_err());
    }

    #[test]
    fn accepts_plain_emails() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@").is_err());
        assert!(validate_email("alice@nodot").is_err());
        assert!(validate_email("alice@.com").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }

    #[test]
    fn user_construction_validates_fields() {
        assert!(User::new(UserId::new(1), "Alice", "alice@example.com").is_ok());
        assert!(User::new(UserId::new(1), "1234", "alice@example.com").is_err());
        assert!(User::new(UserId::new(1), "Alice", "not-an-email").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Any name carrying at least one digit must be rejected.
            #[test]
            fn names_with_digits_never_validate(
                prefix in "[a-zA-Z ]{0,8}",
                digit in "[0-9]",
                suffix in "[a-zA-Z ]{0,8}",
            ) {
                let name = format!("{prefix}{digit}{suffix}");
                prop_assert!(validate_name(&name).is_err());
            }
        }
    }
}
