//! In-memory credential store
//!
//! Process-local tables guarded by a single `RwLock`, so the uniqueness
//! check and the insert happen under one write lock. Data is lost when the
//! process exits.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{validation, CardStore, StoreError, UserStore};
use crate::backend::auth::users::{NewUser, User, UserCredentials, UserUpdate};
use crate::backend::cards::model::{Card, NewCard};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserCredentials>,
    cards: Vec<Card>,
}

/// Credential store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        validation::validate_new_user(&user)?;

        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.user.email == user.email) {
            return Err(StoreError::duplicate("email"));
        }

        let record = User {
            id: Uuid::new_v4(),
            name: user.name,
            avatar: user.avatar,
            email: user.email,
            articles: Vec::new(),
        };
        tables.users.push(UserCredentials {
            user: record.clone(),
            password_hash: user.password_hash,
        });

        Ok(record)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.user.email == email).cloned())
    }

    async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<Option<User>, StoreError> {
        validation::validate_user_update(&update)?;

        let mut tables = self.tables.write().await;
        let Some(stored) = tables.users.iter_mut().find(|u| u.user.id == id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            stored.user.name = name;
        }
        if let Some(avatar) = update.avatar {
            stored.user.avatar = avatar;
        }

        Ok(Some(stored.user.clone()))
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn insert_card(&self, card: NewCard) -> Result<Card, StoreError> {
        validation::validate_new_card(&card)?;

        let record = Card {
            id: Uuid::new_v4(),
            owner: card.owner,
            title: card.title,
            description: card.description,
            image: card.image,
            url: card.url,
            source: card.source,
            published_at: card.published_at,
            created_at: Utc::now(),
        };

        self.tables.write().await.cards.push(record.clone());
        Ok(record)
    }

    async fn find_card_by_id(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.cards.iter().find(|c| c.id == id).cloned())
    }

    async fn list_cards_by_owner(&self, owner: Uuid) -> Result<Vec<Card>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .cards
            .iter()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect())
    }

    async fn delete_card(&self, id: Uuid) -> Result<Option<Card>, StoreError> {
        let mut tables = self.tables.write().await;
        let position = tables.cards.iter().position(|c| c.id == id);
        Ok(position.map(|index| tables.cards.remove(index)))
    }
}
