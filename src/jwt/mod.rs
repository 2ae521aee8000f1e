//! JWT token handling

use crate::config::JwtConfig;
use crate::domain::StringUuid;
use crate::error::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const AUDIENCE: &str = "fastsewa";

/// Access token claims, issued at registration and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (account ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Token type discriminator
    #[serde(default)]
    pub token_type: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// JWT token manager (HS256)
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Create a Validation with a strict leeway (5 seconds) instead of the
    /// default 60 seconds, so tokens expire promptly while tolerating minor
    /// clock skew.
    fn strict_validation(&self) -> Validation {
        let mut v = Validation::new(Algorithm::HS256);
        v.leeway = 5;
        v.set_audience(&[AUDIENCE]);
        v.set_issuer(&[&self.config.issuer]);
        v
    }

    /// Create an access token bound to an account
    pub fn create_access_token(&self, user_id: StringUuid, email: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.access_token_ttl_secs);

        let claims = AccessClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iss: self.config.issuer.clone(),
            aud: AUDIENCE.to_string(),
            token_type: "access".to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        let header = Header::new(Algorithm::HS256);
        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Verify signature, issuer, audience, and expiry, and decode the claims
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.strict_validation())?;
        Ok(token_data.claims)
    }

    /// Token TTL in seconds
    pub fn access_token_ttl(&self) -> i64 {
        self.config.access_token_ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-testing-purposes-only".to_string(),
            issuer: "https://fastsewa.test".to_string(),
            access_token_ttl_secs: 3600,
        }
    }

    #[test]
    fn test_create_and_verify_access_token() {
        let manager = JwtManager::new(test_config());
        let user_id = StringUuid::new_v4();

        let token = manager
            .create_access_token(user_id, "test@example.com")
            .unwrap();

        let claims = manager.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.aud, "fastsewa");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_invalid_token() {
        let manager = JwtManager::new(test_config());
        assert!(manager.verify_access_token("invalid-token").is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let manager = JwtManager::new(test_config());
        let other = JwtManager::new(JwtConfig {
            secret: "a-completely-different-secret".to_string(),
            ..test_config()
        });

        let token = other
            .create_access_token(StringUuid::new_v4(), "test@example.com")
            .unwrap();
        assert!(manager.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let manager = JwtManager::new(test_config());
        let other = JwtManager::new(JwtConfig {
            issuer: "https://evil.test".to_string(),
            ..test_config()
        });

        let token = other
            .create_access_token(StringUuid::new_v4(), "test@example.com")
            .unwrap();
        assert!(manager.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = JwtManager::new(JwtConfig {
            access_token_ttl_secs: -60,
            ..test_config()
        });
        let verifier = JwtManager::new(test_config());

        let token = manager
            .create_access_token(StringUuid::new_v4(), "test@example.com")
            .unwrap();
        assert!(verifier.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_token_has_valid_structure() {
        let manager = JwtManager::new(test_config());
        let token = manager
            .create_access_token(StringUuid::new_v4(), "test@example.com")
            .unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        for part in parts {
            assert!(!part.is_empty());
        }
    }

    #[test]
    fn test_jwt_manager_clone() {
        let manager1 = JwtManager::new(test_config());
        let manager2 = manager1.clone();

        let user_id = StringUuid::new_v4();
        let token = manager1
            .create_access_token(user_id, "test@example.com")
            .unwrap();

        let claims = manager2.verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_access_token_ttl() {
        let manager = JwtManager::new(test_config());
        assert_eq!(manager.access_token_ttl(), 3600);
    }
}
