//! HS256 session tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use folio_core::domain::User;
use folio_core::ports::{AuthError, TokenClaims, TokenService};

const DEFAULT_SECRET: &str = "change-me-in-production";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            expiration_hours: 24,
            issuer: "folio-api".to_string(),
        }
    }
}

impl JwtConfig {
    /// Read `JWT_SECRET`, `JWT_EXPIRATION_HOURS` and `JWT_ISSUER`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);

        if secret == DEFAULT_SECRET {
            tracing::warn!("JWT_SECRET not set, signing sessions with the built-in secret");
        }

        Self {
            secret,
            expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.expiration_hours),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
        }
    }
}

/// Wire form of a session token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: Uuid,
    username: String,
    roles: Vec<String>,
    iat: i64,
    exp: i64,
    iss: String,
}

impl From<SessionClaims> for TokenClaims {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            roles: claims.roles,
        }
    }
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<String, AuthError> {
        let issued_at = Utc::now();
        let claims = SessionClaims {
            sub: user.id,
            username: user.username.clone(),
            roles: user.roles.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + TimeDelta::hours(self.config.expiration_hours)).timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Malformed(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.into())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Malformed(e.to_string()),
            })
    }

    fn lifetime_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(overrides: impl FnOnce(&mut JwtConfig)) -> JwtTokenService {
        let mut config = JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        };
        overrides(&mut config);
        JwtTokenService::new(config)
    }

    fn admin() -> User {
        let mut user = User::new(
            "username".to_string(),
            "test@test.com".to_string(),
            "Full Name".to_string(),
            "hash".to_string(),
        );
        user.roles.push("admin".to_string());
        user
    }

    #[test]
    fn test_issued_token_carries_user() {
        let tokens = service(|_| {});
        let user = admin();

        let claims = tokens.verify(&tokens.issue(&user).unwrap()).unwrap();

        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.username, "username");
        assert_eq!(claims.roles, user.roles);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let tokens = service(|_| {});
        assert!(matches!(
            tokens.verify("invalid-token"),
            Err(AuthError::Malformed(_))
        ));
    }

    #[test]
    fn test_other_issuer_or_secret_is_rejected() {
        let token = service(|_| {}).issue(&admin()).unwrap();

        assert!(service(|c| c.issuer = "other".to_string()).verify(&token).is_err());
        assert!(service(|c| c.secret = "other".to_string()).verify(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let tokens = service(|c| c.expiration_hours = -2);
        let token = tokens.issue(&admin()).unwrap();

        assert!(matches!(tokens.verify(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn test_lifetime() {
        assert_eq!(service(|c| c.expiration_hours = 24).lifetime_seconds(), 86400);
    }
}
