//! JWT utilities for authentication
//!
//! Access tokens are HS256 signed and carry the user's email as subject
//! together with the role name the user held when the token was issued.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Role name at issue time, e.g. `ROLE_USER`
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// The principal name (email) the token was issued for
    pub fn email(&self) -> &str {
        &self.sub
    }
}

/// JWT service for issuing and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    pub fn new(secret: &str, expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry,
        }
    }

    /// Issue a signed token for a principal
    pub fn issue(&self, email: &str, role: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate a token
    ///
    /// Expired signatures map to `TokenExpired`, anything else to `InvalidToken`.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_issue_and_decode() {
        let service = service();
        let token = service.issue("ada@example.com", "ROLE_USER").unwrap();

        let claims = service.decode_token(&token).unwrap();
        assert_eq!(claims.email(), "ada@example.com");
        assert_eq!(claims.role, "ROLE_USER");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token() {
        // Past the default 60s leeway
        let service = JwtService::new("test-secret-key-that-is-long-enough", -120);
        let token = service.issue("ada@example.com", "ROLE_USER").unwrap();

        assert!(matches!(
            service.decode_token(&token),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = service().issue("ada@example.com", "ROLE_ADMIN").unwrap();
        let other = JwtService::new("a-completely-different-secret-value", 3600);

        assert!(matches!(other.decode_token(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token() {
        assert!(matches!(
            service().decode_token("invalid.token.here"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug = format!("{:?}", service());
        assert!(debug.contains("expiry"));
        assert!(!debug.contains("secret"));
    }
}
