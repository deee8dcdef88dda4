//! Credential Store
//!
//! Ports describing how the services expect to persist users and cards,
//! plus the adapters that implement them.
//!
//! # Adapters
//!
//! - **`postgres`** - `PgStore`, backed by a `sqlx` PostgreSQL pool
//! - **`memory`** - `MemoryStore`, process-local tables used when no
//!   database is configured and by the tests
//!
//! Both adapters run the validators in [`validation`] before every write and
//! enforce email uniqueness, so the services see the same failures whichever
//! adapter is plugged in.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, UserCredentials, UserUpdate};
use crate::backend::cards::model::{Card, NewCard};
use crate::shared::SharedError;

/// Field validators applied by every adapter
pub mod validation;

/// In-memory adapter
pub mod memory;

/// PostgreSQL adapter
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors reported by a credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A field constraint was violated
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// A unique field already holds the supplied value
    #[error("duplicate value for unique field '{field}'")]
    Duplicate {
        /// The unique field that collided
        field: String,
    },

    /// Any other database failure, including connectivity
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Create a duplicate error for the given field
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }
}

/// Persistence port for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Validate and persist a new user. Fails with `Duplicate` when the email
    /// is already registered.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Fetch a user by identifier. The password hash is never selected.
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Fetch a user by email, re-selecting the password hash.
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError>;

    /// Apply a partial update, returning the updated record or `None` when the
    /// identifier does not resolve to a user.
    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<Option<User>, StoreError>;
}

/// Persistence port for card records
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Validate and persist a new card
    async fn insert_card(&self, card: NewCard) -> Result<Card, StoreError>;

    /// Fetch a card by identifier
    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError>;

    /// All cards belonging to `owner`, oldest first
    async fn list_cards_by_owner(&self, owner: Uuid) -> Result<Vec<Card>, StoreError>;

    /// Delete a card, returning the deleted record or `None` if it was
    /// already gone.
    async fn delete_card(&self, id: Uuid) -> Result<Option<Card>, StoreError>;
}
