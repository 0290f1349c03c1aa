//! Authentication ports: bearer tokens for sessions, password hashes for signin.

use uuid::Uuid;

use crate::domain::User;

/// What a verified bearer token says about its holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
}

/// Issues and verifies session tokens.
pub trait TokenService: Send + Sync {
    /// Token for `user`, carrying its id, username and roles.
    fn issue(&self, user: &User) -> Result<String, AuthError>;

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Seconds an issued token stays valid.
    fn lifetime_seconds(&self) -> i64;
}

pub trait PasswordService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Whether `password` produces `hash`. A malformed hash is an error.
    fn check(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Session expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Malformed(String),

    #[error("Missing bearer token")]
    Missing,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

