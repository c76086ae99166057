//! JWT service for identity token issuance and verification
//!
//! Tokens carry a single identity claim (the caller's email) and are signed
//! with a process-wide HS256 secret. They expire five hours after issuance;
//! there is no server-side session store and no revocation.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Token lifetime in seconds (5 hours)
pub const TOKEN_EXPIRY_SECS: i64 = 5 * 60 * 60;

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Shared secret for signing and verifying tokens
    pub secret: String,
    /// Token expiration time in seconds
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: TOKEN_EXPIRY_SECS,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity of the caller
    pub email: String,
    /// Issued at time
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtService {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }

    /// Issue a token for the given email, valid from now
    pub fn issue(&self, email: &str) -> Result<String> {
        self.issue_at(email, Utc::now())
    }

    /// Issue a token as if the clock read `now`
    pub fn issue_at(&self, email: &str, now: DateTime<Utc>) -> Result<String> {
        let expires_at = now + Duration::seconds(self.config.token_expiry);
        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a token and return the claims
    ///
    /// Fails when the signature does not match, the payload is malformed or
    /// the expiry has elapsed.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new(JwtConfig::new("test-secret"))
    }

    #[test]
    fn verify_returns_issued_claim() {
        let service = service();
        let token = service.issue("student@example.com").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.email, "student@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_SECS);
    }

    #[test]
    fn issue_at_is_deterministic() {
        let service = service();
        let now = Utc::now();

        let first = service.issue_at("student@example.com", now).unwrap();
        let second = service.issue_at("student@example.com", now).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn verify_rejects_expired_token() {
        let service = service();
        let issued = Utc::now() - Duration::seconds(TOKEN_EXPIRY_SECS + 1);
        let token = service.issue_at("student@example.com", issued).unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn verify_accepts_token_just_before_expiry() {
        let service = service();
        let issued = Utc::now() - Duration::seconds(TOKEN_EXPIRY_SECS - 60);
        let token = service.issue_at("student@example.com", issued).unwrap();

        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn verify_rejects_foreign_signature() {
        let token = JwtService::new(JwtConfig::new("other-secret"))
            .issue("student@example.com")
            .unwrap();

        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_malformed_token() {
        let service = service();
        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.token").is_err());

        let mut token = service.issue("student@example.com").unwrap();
        token.push('x');
        assert!(service.verify(&token).is_err());
    }
}
