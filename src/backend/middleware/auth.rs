/**
 * Authentication Middleware
 *
 * Gate for routes that require a caller identity. It extracts the bearer
 * token from the `Authorization` header, verifies it and attaches the
 * caller's user ID to the request extensions. A missing header, a scheme
 * other than `Bearer` and a token that fails verification are all rejected
 * with the same 401 before the handler runs.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Identity attached to a request by the auth middleware
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Verify the request's bearer token
///
/// Returns the authenticated identity or `Unauthorized`.
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<AuthenticatedUser, BackendError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::unauthorized()
    })?;

    let id = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        BackendError::unauthorized()
    })?;

    Ok(AuthenticatedUser { id })
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &app_state.tokens)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Reads the identity set by `auth_middleware`; rejects with 401 when the
/// middleware did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized()
            })?;

        Ok(AuthUser(user))
    }
}
