//! Session authentication module.
//!
//! Issues and verifies the signed session cookie and provides request
//! extractors for route handlers. The caller's identity is resolved once
//! per request into an explicit `Identity` value rather than a bare
//! "is this id truthy" check.

use std::future::{ready, Ready};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::constants::SESSION_COOKIE;
use crate::errors::AppError;
use crate::store::Store;

/// Claims carried by the session token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id the session is bound to
    sub: String,
    /// Expiry as a unix timestamp
    exp: usize,
}

/// The caller's identity for one request.
///
/// Anonymous covers every failure mode: no cookie, malformed or expired
/// token, or a token whose user no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Authenticated(String),
    Anonymous,
}

impl Identity {
    /// The resolved user id, if any
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Identity::Authenticated(id) => Some(id),
            Identity::Anonymous => None,
        }
    }
}

/// Build the signed session cookie for a freshly authenticated user
pub fn session_cookie(user_id: &str, config: &Config) -> Result<Cookie<'static>, AppError> {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + Duration::hours(config.session_ttl_hours)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("failed to sign session token: {}", e)))?;

    Ok(Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish())
}

/// Build an expired cookie that clears the session on the client.
///
/// Clearing is unconditional, so logout stays idempotent.
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

/// Resolve the caller's identity from the session cookie.
///
/// Never fails; every invalid state maps to `Identity::Anonymous`.
fn resolve_identity(req: &HttpRequest) -> Identity {
    let config = match req.app_data::<web::Data<Config>>() {
        Some(config) => config,
        None => return Identity::Anonymous,
    };
    let store = match req.app_data::<web::Data<Store>>() {
        Some(store) => store,
        None => return Identity::Anonymous,
    };

    let token = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Identity::Anonymous,
    };

    let data = match decode::<Claims>(
        &token,
        &DecodingKey::from_secret(config.session_secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("Rejecting session token: {}", e);
            return Identity::Anonymous;
        }
    };

    // A token whose user has disappeared counts as no session at all
    match store.read_users() {
        Ok(users) if users.contains_key(&data.claims.sub) => {
            Identity::Authenticated(data.claims.sub)
        }
        _ => Identity::Anonymous,
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(resolve_identity(req)))
    }
}

/// Authenticated user extractor for protecting mutating endpoints.
///
/// Add this to handler parameters to reject anonymous callers outright;
/// page handlers that redirect to the login form use `Identity` instead.
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match resolve_identity(req) {
            Identity::Authenticated(user_id) => ready(Ok(AuthenticatedUser { user_id })),
            Identity::Anonymous => ready(Err(AppError::missing_session())),
        }
    }
}
