//! Session token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use vitrine_core::config::AuthConfig;
use vitrine_core::error::AppError;
use vitrine_entity::user::User;

use super::claims::Claims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    token_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_hours: config.token_ttl_hours as i64,
        }
    }

    /// Issues a signed session token for the given user.
    ///
    /// The token embeds the user's id, email, and admin flag, and expires
    /// at issuance time plus the configured TTL.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(self.token_ttl_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key".to_string(),
            token_ttl_hours: 2,
            bcrypt_cost: 4,
        }
    }

    fn test_user(is_admin: bool) -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            is_admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issued_token_has_three_segments() {
        let encoder = JwtEncoder::new(&test_config());
        let token = encoder.issue(&test_user(false)).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_tokens_differ_per_user() {
        let encoder = JwtEncoder::new(&test_config());
        let first = encoder.issue(&test_user(false)).unwrap();
        let second = encoder.issue(&test_user(true)).unwrap();
        assert_ne!(first, second);
    }
}
