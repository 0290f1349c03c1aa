//! Authentication extractors.

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use uuid::Uuid;

use folio_core::policy::Role;
use folio_core::ports::{AuthError, TokenClaims};

use super::error::AppError;
use crate::state::AppState;

/// The signed-in caller. As a handler argument it rejects guests with 401.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
}

impl Identity {
    pub fn role(&self) -> Role {
        Role::from_roles(&self.roles)
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            roles: claims.roles,
        }
    }
}

/// Decode the Bearer token carried by `req`.
pub fn authenticate(req: &HttpRequest) -> Result<Identity, AuthError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not registered, cannot verify tokens");
        return Err(AuthError::Missing);
    };

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Missing)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::Malformed("Invalid authorization header".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::Malformed("Expected Bearer token".to_string()))?;

    state.tokens.verify(token).map(Identity::from)
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Hashing(msg) => AppError::Internal(msg),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(AppError::from))
    }
}

/// The caller of a resource route: an identity, or a guest.
///
/// Missing or invalid tokens make a guest session rather than an error; the
/// access policy decides what a guest may do.
#[derive(Debug, Clone, Default)]
pub struct Session(pub Option<Identity>);

impl Session {
    pub fn from_http_request(req: &HttpRequest) -> Self {
        Session(authenticate(req).ok())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.0.as_ref().map(|i| i.user_id)
    }

    pub fn role(&self) -> Role {
        self.0.as_ref().map(Identity::role).unwrap_or(Role::Guest)
    }
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // The policy guard stores the session it checked.
        let session = req
            .extensions()
            .get::<Session>()
            .cloned()
            .unwrap_or_else(|| Session::from_http_request(req));

        ready(Ok(session))
    }
}
