/**
 * User Model
 *
 * This module defines the user record and the values the user service
 * hands to the credential store.
 *
 * The public `User` record has no password field at all; the bcrypt hash
 * only travels inside `UserCredentials`, which is returned solely by the
 * email lookup used during login.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User record as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Display name (2-30 chars)
    pub name: String,
    /// Avatar URL
    pub avatar: String,
    /// Email address (unique)
    pub email: String,
    /// Identifiers of cards saved by this user
    #[serde(default)]
    pub articles: Vec<Uuid>,
}

/// A user together with the stored password hash
///
/// Only produced by `UserStore::find_credentials_by_email`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    /// bcrypt hash of the password
    pub password_hash: String,
}

/// Values for a user about to be created
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub avatar: String,
    pub email: String,
    /// bcrypt hash, never the plaintext
    pub password_hash: String,
}

/// Partial profile update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl UserUpdate {
    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none()
    }
}
