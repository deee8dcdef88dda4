/**
 * Backend Error Types
 *
 * `BackendError` is the tagged error kind every service returns. Failures a
 * service understands are classified at the point they are detected
 * (missing fields, store validation, duplicate email, bad credentials,
 * missing records); everything else passes through unclassified and is
 * reported as 500 with its raw message.
 *
 * # Status Code Mapping
 *
 * - `BadRequest` - 400
 * - `Unauthorized` - 401
 * - `NotFound` - 404
 * - `Conflict` - 409
 * - `NotCardOwner`, `Store`, `Hashing`, `Token`, `Internal` - 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Fixed human-readable messages
pub mod messages {
    pub const BAD_REQUEST: &str = "Bad request";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const NOT_FOUND: &str = "Not found";
    pub const CARD_NOT_FOUND: &str = "Card not found";
    pub const CONFLICT: &str = "Conflict: email already exists";
    pub const ROUTE_NOT_FOUND: &str = "Route not found";
    pub const NOT_CARD_OWNER: &str = "Unauthorized to delete this card";
}

/// Backend error kinds
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or malformed input
    #[error("{message}")]
    BadRequest { message: String },

    /// Missing, invalid or expired token, or failed login
    #[error("{message}")]
    Unauthorized { message: String },

    /// Referenced entity is absent
    #[error("{message}")]
    NotFound { message: String },

    /// Uniqueness violation
    #[error("{message}")]
    Conflict { message: String },

    /// Caller tried to delete a card owned by someone else.
    ///
    /// Reported as an unclassified failure.
    #[error("{}", messages::NOT_CARD_OWNER)]
    NotCardOwner,

    /// Unclassified store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Password hashing or verification failed
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing failed
    #[error("Token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Any other internal failure
    #[error("{message}")]
    Internal { message: String },
}

impl BackendError {
    /// `BadRequest` with the standard message
    pub fn bad_request() -> Self {
        Self::BadRequest {
            message: messages::BAD_REQUEST.to_string(),
        }
    }

    /// `Unauthorized` with the standard message
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            message: messages::UNAUTHORIZED.to_string(),
        }
    }

    /// `NotFound` with a custom message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// `Conflict` with the standard duplicate-email message
    pub fn conflict() -> Self {
        Self::Conflict {
            message: messages::CONFLICT.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotCardOwner
            | Self::Store(_)
            | Self::Hashing(_)
            | Self::Token(_)
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether this error was classified by a service
    pub fn is_classified(&self) -> bool {
        !self.status_code().is_server_error()
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Background task failed: {err}"))
    }
}
