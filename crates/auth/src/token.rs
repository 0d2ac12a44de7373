//! HS256 bearer token issuance and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::{AuthError, ConfigError, SigningError};

/// Issues and validates signed bearer tokens.
///
/// Construction fails when any signing parameter is blank; after that the
/// service is immutable and shared freely across requests. Validation
/// failures on untrusted input come back as [`AuthError`] values.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(cfg: &AuthConfig) -> Result<Self, ConfigError> {
        if cfg.secret.trim().is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }
        if cfg.issuer.trim().is_empty() {
            return Err(ConfigError::Missing("JWT_ISSUER"));
        }
        if cfg.audience.trim().is_empty() {
            return Err(ConfigError::Missing("JWT_AUDIENCE"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&cfg.issuer]);
        validation.set_audience(&[&cfg.audience]);
        // Expiry is exact; no clock-skew allowance.
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            validation,
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            ttl: Duration::hours(1),
        })
    }

    /// Issue a token for an already-authenticated principal.
    ///
    /// Expiry is exactly one hour after issuance.
    pub fn issue(&self, principal: &str) -> Result<String, SigningError> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Validate a presented bearer token.
    ///
    /// Verifies signature, expiry, issuer, and audience.
    pub fn validate(&self, raw: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(raw, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidSignature => AuthError::BadSignature,
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    AuthError::IssuerOrAudienceMismatch
                }
                _ => AuthError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            secret: "test-secret".to_string(),
            issuer: "userhub".to_string(),
            audience: "userhub-clients".to_string(),
            login_username: "admin".to_string(),
            login_password: "password".to_string(),
        }
    }

    fn service() -> TokenService {
        TokenService::new(&test_config()).expect("test config is complete")
    }

    fn mint(secret: &str, claims: &Claims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to encode test token")
    }

    fn claims_valid_for(sub: &str) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: sub.to_string(),
            iss: "userhub".to_string(),
            aud: "userhub-clients".to_string(),
            iat: now,
            exp: now + 600,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let svc = service();

        let token = svc.issue("admin").unwrap();
        let claims = svc.validate(&token).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iss, "userhub");
        assert_eq!(claims.aud, "userhub-clients");
    }

    #[test]
    fn expiry_is_one_hour_after_issuance() {
        let svc = service();

        let before = Utc::now().timestamp();
        let token = svc.issue("admin").unwrap();
        let after = Utc::now().timestamp();

        let claims = svc.validate(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(claims.iat >= before && claims.iat <= after);
    }

    #[test]
    fn expired_token_is_rejected_despite_valid_signature() {
        let svc = service();

        let now = Utc::now().timestamp();
        let mut claims = claims_valid_for("admin");
        claims.iat = now - 7200;
        claims.exp = now - 3600;
        let token = mint("test-secret", &claims);

        assert_eq!(svc.validate(&token), Err(AuthError::Expired));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let svc = service();
        let token = svc.issue("admin").unwrap();

        // Swap the first signature character for a different alphabet
        // character so decoding still reaches signature verification.
        let (head, sig) = token.rsplit_once('.').unwrap();
        let flipped = if sig.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{head}.{flipped}{}", &sig[1..]);

        assert_eq!(svc.validate(&tampered), Err(AuthError::BadSignature));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let svc = service();
        let token = mint("some-other-secret", &claims_valid_for("admin"));

        assert_eq!(svc.validate(&token), Err(AuthError::BadSignature));
    }

    #[test]
    fn issuer_mismatch_is_rejected() {
        let svc = service();

        let mut claims = claims_valid_for("admin");
        claims.iss = "someone-else".to_string();
        let token = mint("test-secret", &claims);

        assert_eq!(svc.validate(&token), Err(AuthError::IssuerOrAudienceMismatch));
    }

    #[test]
    fn audience_mismatch_is_rejected() {
        let svc = service();

        let mut claims = claims_valid_for("admin");
        claims.aud = "other-clients".to_string();
        let token = mint("test-secret", &claims);

        assert_eq!(svc.validate(&token), Err(AuthError::IssuerOrAudienceMismatch));
    }

    #[test]
    fn garbage_is_malformed() {
        let svc = service();

        assert_eq!(svc.validate(""), Err(AuthError::Malformed));
        assert_eq!(svc.validate("not-a-token"), Err(AuthError::Malformed));
        assert_eq!(svc.validate("a.b.c"), Err(AuthError::Malformed));
    }

    #[test]
    fn blank_signing_parameters_are_fatal() {
        let mut cfg = test_config();
        cfg.secret = String::new();
        assert_eq!(
            TokenService::new(&cfg).err(),
            Some(ConfigError::Missing("JWT_SECRET"))
        );

        let mut cfg = test_config();
        cfg.issuer = "  ".to_string();
        assert_eq!(
            TokenService::new(&cfg).err(),
            Some(ConfigError::Missing("JWT_ISSUER"))
        );

        let mut cfg = test_config();
        cfg.audience = String::new();
        assert_eq!(
            TokenService::new(&cfg).err(),
            Some(ConfigError::Missing("JWT_AUDIENCE"))
        );
    }
}
