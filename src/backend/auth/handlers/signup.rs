/**
 * Signup Handler
 *
 * POST /signup
 *
 * # Registration Process
 *
 * 1. Reject the request if name, avatar, email or password is missing
 * 2. Hash the password using bcrypt (cost 10)
 * 3. Create the user; the store validates name, avatar and email
 * 4. Return the created user, without any password field
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::service::UserService;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is missing or fails validation
/// * `409 Conflict` - If the email is already registered
/// * `500 Internal Server Error` - If hashing or the store fails
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Jo",
///   "avatar": "http://x.com/a.png",
///   "email": "a@b.com",
///   "password": "p12345"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "_id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Jo",
///   "avatar": "http://x.com/a.png",
///   "email": "a@b.com",
///   "articles": []
/// }
/// ```
pub async fn signup(
    State(users): State<UserService>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<User>), BackendError> {
    let user = users.signup(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
