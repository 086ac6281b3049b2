use crate::error::ApiError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use model::entities::user;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access-token claims. `jti` is the revocation handle recorded in the
/// token blocklist on logout; the token itself stays structurally valid
/// until `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// User email
    pub email: String,
    /// Token id (v4 UUID), used for revocation
    pub jti: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// HS256 signing configuration shared through the application state.
#[derive(Clone)]
pub struct JwtConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl JwtConfig {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        f.debug_struct("JwtConfig")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

/// Issue a signed, time-bound access token for the given user.
pub fn issue_access_token(user: &user::Model, config: &JwtConfig) -> Result<String, ApiError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now,
        exp: now + config.ttl_secs,
    };

    encode(&Header::default(), &claims, &config.encoding_key)
        .map_err(|e| ApiError::Internal(format!("failed to sign access token: {}", e)))
}

/// Validate signature and expiry, returning the embedded claims.
/// Blocklist membership is checked separately by the request extractor.
pub fn decode_access_token(token: &str, config: &JwtConfig) -> Result<Claims, ApiError> {
    decode::<Claims>(token, &config.decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| ApiError::Unauthorized("invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> user::Model {
        user::Model {
            id: 42,
            email: "luke@rebellion.org".to_string(),
            password_hash: "unused".to_string(),
            is_active: true,
            name: "Luke".to_string(),
        }
    }

    #[test]
    fn test_claims_round_trip() {
        let config = JwtConfig::new("test-secret", 3600);
        let token = issue_access_token(&test_user(), &config).unwrap();

        let claims = decode_access_token(&token, &config).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "luke@rebellion.org");
        assert!(Uuid::parse_str(&claims.jti).is_ok());
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_each_token_gets_a_fresh_jti() {
        let config = JwtConfig::new("test-secret", 3600);
        let first = decode_access_token(&issue_access_token(&test_user(), &config).unwrap(), &config)
            .unwrap();
        let second =
            decode_access_token(&issue_access_token(&test_user(), &config).unwrap(), &config)
                .unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = JwtConfig::new("test-secret", 3600);
        let other = JwtConfig::new("other-secret", 3600);
        let token = issue_access_token(&test_user(), &config).unwrap();
        assert!(decode_access_token(&token, &other).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = JwtConfig::new("test-secret", 3600);
        let mut token = issue_access_token(&test_user(), &config).unwrap();
        token.push('x');
        assert!(decode_access_token(&token, &config).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // ttl of -120s puts exp well past the default 60s validation leeway
        let config = JwtConfig::new("test-secret", -120);
        let token = issue_access_token(&test_user(), &config).unwrap();
        assert!(decode_access_token(&token, &config).is_err());
    }
}
