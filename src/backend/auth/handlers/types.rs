/**
 * Authentication Handler Types
 *
 * Request and response bodies for the user endpoints. Every request field is
 * optional at the deserialization layer so that a missing field reaches the
 * service and is reported as `400 Bad request` rather than an extractor
 * error.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SignupRequest {
    /// Display name (2-30 chars)
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Profile update request; absent fields are left untouched
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Login response
///
/// Carries only the token, never user data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    /// Bearer token (7-day expiration)
    pub token: String,
}
