//! Card model
//!
//! A card bookmarks an external news article for its owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Card record as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Owning user; fixed at creation
    pub owner: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub source: String,
    /// When the article was published
    pub published_at: DateTime<Utc>,
    /// When the card was saved
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Whether `user_id` owns this card
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner == user_id
    }
}

/// Values for a card about to be created
#[derive(Debug, Clone)]
pub struct NewCard {
    pub owner: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
}
