/**
 * Current User Handlers
 *
 * GET /me and PATCH /me. Both require a valid bearer token; the auth
 * middleware has already attached the caller's identity by the time these
 * run.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UpdateProfileRequest;
use crate::backend::auth::service::UserService;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the token is missing or invalid (middleware)
/// * `404 Not Found` - If the token's user no longer exists
pub async fn get_me(
    State(users): State<UserService>,
    AuthUser(user): AuthUser,
) -> Result<Json<User>, BackendError> {
    let user = users.get_current_user(user.id).await?;
    Ok(Json(user))
}

/// Update current user handler
///
/// Only `name` and `avatar` can change; other body fields are ignored. A
/// request without a body is an empty update and returns the user as is.
///
/// # Errors
///
/// * `400 Bad Request` - If a supplied field fails validation
/// * `401 Unauthorized` - If the token is missing or invalid (middleware)
/// * `404 Not Found` - If the token's user no longer exists
pub async fn update_me(
    State(users): State<UserService>,
    AuthUser(user): AuthUser,
    body: Option<JsonBody<UpdateProfileRequest>>,
) -> Result<Json<User>, BackendError> {
    let request = body.map(|JsonBody(request)| request).unwrap_or_default();
    let user = users.update_profile(user.id, request).await?;
    Ok(Json(user))
}
