//! Bearer token verification
//!
//! Tokens are minted by the hosted identity provider with a shared HS256
//! secret; the backend never issues or refreshes them. The decoding key is
//! pre-computed once at startup and shared via AppState.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Claims carried by identity-provider tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Email as asserted by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name as asserted by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Token verification failures
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("invalid user ID in token")]
    InvalidSubject,
}

/// Pre-computed token verifier
///
/// Create once at application startup; cloning is an Arc increment.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding: Arc<DecodingKey>,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation,
        }
    }

    /// Verify a bearer token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Verify a token and parse its subject as a user ID
    pub fn verify_user(&self, token: &str) -> Result<(Uuid, Claims), TokenError> {
        let claims = self.verify(token)?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| TokenError::InvalidSubject)?;
        Ok((user_id, claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn mint(sub: &str, expires_in_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            exp: now + expires_in_secs,
            iat: now,
            email: Some("test@example.com".to_string()),
            name: None,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let verifier = TokenVerifier::new(SECRET);
        let user_id = Uuid::new_v4();
        let token = mint(&user_id.to_string(), 3600);

        let (parsed_id, claims) = verifier.verify_user(&token).unwrap();
        assert_eq!(parsed_id, user_id);
        assert_eq!(claims.email.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint(&Uuid::new_v4().to_string(), -3600);

        assert!(matches!(
            verifier.verify(&token),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let verifier = TokenVerifier::new("other-secret");
        let token = mint(&Uuid::new_v4().to_string(), 3600);

        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_non_uuid_subject() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint("not-a-uuid", 3600);

        assert!(matches!(
            verifier.verify_user(&token),
            Err(TokenError::InvalidSubject)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let verifier = TokenVerifier::new(SECRET);
        assert!(verifier.verify("not.a.token").is_err());
        assert!(verifier.verify("").is_err());
    }
}
