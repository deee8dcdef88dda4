/**
 * Login Handler
 *
 * POST /login
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password both return the same 401 response
 * - The response carries only the token, never user data
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::service::UserService;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is missing
/// * `401 Unauthorized` - If the credentials do not match a user
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(users): State<UserService>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let token = users.login(request).await?;
    Ok(Json(TokenResponse { token }))
}
